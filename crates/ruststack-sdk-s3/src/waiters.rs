//! Waiters for bucket and object existence.

use std::time::Duration;

use ruststack_sdk_core::SdkError;
use ruststack_sdk_runtime::{Waiter, WaiterConfig, WaiterState};
use ruststack_sdk_s3_model::input::{HeadBucketInput, HeadObjectInput};
use ruststack_sdk_s3_model::output::{HeadBucketOutput, HeadObjectOutput};

use crate::S3Client;

/// Delay and timeout used by every S3 waiter unless overridden.
pub const DEFAULT_WAITER_CONFIG: WaiterConfig =
    WaiterConfig::new(Duration::from_secs(5), Duration::from_secs(100));

fn bucket_exists_acceptor(outcome: &Result<HeadBucketOutput, SdkError>) -> WaiterState {
    match outcome {
        Ok(_) => WaiterState::Success,
        // the bucket exists but lives elsewhere or belongs to someone else
        Err(err) if matches!(err.status(), Some(301 | 403)) => WaiterState::Success,
        Err(err) if err.status() == Some(404) => WaiterState::Pending,
        Err(_) => WaiterState::Failure,
    }
}

fn bucket_not_exists_acceptor(outcome: &Result<HeadBucketOutput, SdkError>) -> WaiterState {
    match outcome {
        Ok(_) => WaiterState::Pending,
        Err(err) if err.status() == Some(404) => WaiterState::Success,
        Err(_) => WaiterState::Failure,
    }
}

fn object_exists_acceptor(outcome: &Result<HeadObjectOutput, SdkError>) -> WaiterState {
    match outcome {
        Ok(_) => WaiterState::Success,
        Err(err) if err.status() == Some(404) => WaiterState::Pending,
        Err(_) => WaiterState::Failure,
    }
}

fn object_not_exists_acceptor(outcome: &Result<HeadObjectOutput, SdkError>) -> WaiterState {
    match outcome {
        Ok(_) => WaiterState::Pending,
        Err(err) if err.status() == Some(404) => WaiterState::Success,
        Err(_) => WaiterState::Failure,
    }
}

impl S3Client {
    fn head_bucket_waiter(
        &self,
        name: &'static str,
        input: HeadBucketInput,
        acceptor: fn(&Result<HeadBucketOutput, SdkError>) -> WaiterState,
    ) -> Waiter<HeadBucketOutput> {
        let client = self.clone();
        Waiter::new(name, DEFAULT_WAITER_CONFIG, acceptor, move || {
            let client = client.clone();
            let input = input.clone();
            async move { client.head_bucket(input).await }
        })
    }

    fn head_object_waiter(
        &self,
        name: &'static str,
        input: HeadObjectInput,
        acceptor: fn(&Result<HeadObjectOutput, SdkError>) -> WaiterState,
    ) -> Waiter<HeadObjectOutput> {
        let client = self.clone();
        Waiter::new(name, DEFAULT_WAITER_CONFIG, acceptor, move || {
            let client = client.clone();
            let input = input.clone();
            async move { client.head_object(input).await }
        })
    }

    /// Waiter that polls `HeadBucket` until the bucket exists.
    ///
    /// A 301 or 403 answer also counts as existing.
    #[must_use]
    pub fn bucket_exists_waiter(&self, input: HeadBucketInput) -> Waiter<HeadBucketOutput> {
        self.head_bucket_waiter("BucketExists", input, bucket_exists_acceptor)
    }

    /// Waiter that polls `HeadBucket` until it answers 404.
    #[must_use]
    pub fn bucket_not_exists_waiter(&self, input: HeadBucketInput) -> Waiter<HeadBucketOutput> {
        self.head_bucket_waiter("BucketNotExists", input, bucket_not_exists_acceptor)
    }

    /// Waiter that polls `HeadObject` until the object exists.
    #[must_use]
    pub fn object_exists_waiter(&self, input: HeadObjectInput) -> Waiter<HeadObjectOutput> {
        self.head_object_waiter("ObjectExists", input, object_exists_acceptor)
    }

    /// Waiter that polls `HeadObject` until it answers 404.
    #[must_use]
    pub fn object_not_exists_waiter(&self, input: HeadObjectInput) -> Waiter<HeadObjectOutput> {
        self.head_object_waiter("ObjectNotExists", input, object_not_exists_acceptor)
    }

    /// Block until the bucket exists, with the default delay and timeout.
    pub async fn wait_until_bucket_exists(&self, input: HeadBucketInput) -> Result<(), SdkError> {
        self.bucket_exists_waiter(input).wait().await
    }

    /// Block until the bucket is gone, with the default delay and timeout.
    pub async fn wait_until_bucket_not_exists(
        &self,
        input: HeadBucketInput,
    ) -> Result<(), SdkError> {
        self.bucket_not_exists_waiter(input).wait().await
    }

    /// Block until the object exists, with the default delay and timeout.
    pub async fn wait_until_object_exists(&self, input: HeadObjectInput) -> Result<(), SdkError> {
        self.object_exists_waiter(input).wait().await
    }

    /// Block until the object is gone, with the default delay and timeout.
    pub async fn wait_until_object_not_exists(
        &self,
        input: HeadObjectInput,
    ) -> Result<(), SdkError> {
        self.object_not_exists_waiter(input).wait().await
    }
}
