// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// [START storage_get_soft_delete_policy]
use anyhow::Context;
use google_cloud_gax::options::RequestOptionsBuilder;
use google_cloud_storage::client::StorageControl;
use std::io::Write;
use std::time::Duration;

/// Reports the soft delete policy of a bucket, or that the policy is
/// absent or disabled.
pub async fn sample(
    client: &StorageControl,
    w: &mut impl Write,
    bucket_id: &str,
) -> anyhow::Result<()> {
    let bucket = client
        .get_bucket()
        .set_name(format!("projects/_/buckets/{bucket_id}"))
        .with_attempt_timeout(Duration::from_secs(10))
        .send()
        .await
        .with_context(|| format!("fetching metadata for bucket {bucket_id}"))?;

    let Some(policy) = bucket.soft_delete_policy else {
        writeln!(
            w,
            "Bucket {bucket_id} does not have a soft delete policy set."
        )?;
        return Ok(());
    };
    // A policy whose retention duration is unset is the protobuf zero
    // value, i.e. soft delete is turned off.
    let retention = policy.retention_duration.unwrap_or_default();
    if retention.seconds() == 0 && retention.nanos() == 0 {
        writeln!(w, "Soft delete is disabled for bucket {bucket_id}.")?;
        return Ok(());
    }
    let effective_time = policy
        .effective_time
        .map(String::from)
        .unwrap_or_else(|| "(unknown)".to_string());
    writeln!(
        w,
        "Soft delete policy for bucket {bucket_id} is:\n EffectiveTime: {effective_time}\n RetentionDuration: {}",
        String::from(retention)
    )?;
    Ok(())
}
// [END storage_get_soft_delete_policy]
