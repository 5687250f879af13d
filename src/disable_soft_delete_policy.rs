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

// [START storage_disable_soft_delete_policy]
use anyhow::Context;
use google_cloud_gax::options::RequestOptionsBuilder;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Bucket;
use google_cloud_storage::model::bucket::SoftDeletePolicy;
use google_cloud_wkt::FieldMask;
use std::io::Write;
use std::time::Duration;

/// Disables soft delete for a bucket by setting the retention duration
/// to zero.
pub async fn sample(
    client: &StorageControl,
    w: &mut impl Write,
    bucket_id: &str,
) -> anyhow::Result<()> {
    let policy =
        SoftDeletePolicy::new().set_retention_duration(google_cloud_wkt::Duration::default());
    client
        .update_bucket()
        .set_bucket(
            Bucket::new()
                .set_name(format!("projects/_/buckets/{bucket_id}"))
                .set_soft_delete_policy(policy),
        )
        .set_update_mask(FieldMask::default().set_paths(["soft_delete_policy"]))
        .with_attempt_timeout(Duration::from_secs(10))
        .send()
        .await
        .with_context(|| format!("disabling soft delete for bucket {bucket_id}"))?;

    writeln!(w, "Soft delete policy for bucket {bucket_id} was disabled.")?;
    Ok(())
}
// [END storage_disable_soft_delete_policy]
