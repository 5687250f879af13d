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

//! Examples showing how to manage a bucket's soft delete policy.

pub mod disable_soft_delete_policy;
pub mod get_soft_delete_policy;

use anyhow::Context;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Bucket;
use google_cloud_storage::model::bucket::SoftDeletePolicy;
use rand::Rng;

pub const BUCKET_ID_LENGTH: usize = 63;

const WEEK_IN_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Runs the soft delete policy examples against a throwaway bucket.
///
/// Bucket ids are pushed into `buckets` before any remote call, so the
/// caller can clean up even when the run fails halfway.
pub async fn run_soft_delete_examples(buckets: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = {
        use tracing_subscriber::fmt::format::FmtSpan;
        let subscriber = tracing_subscriber::fmt()
            .with_level(true)
            .with_thread_ids(true)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .finish();

        tracing::subscriber::set_default(subscriber)
    };

    let client = StorageControl::builder()
        .build()
        .await
        .context("creating the StorageControl client")?;
    let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;

    let id = random_bucket_id();
    buckets.push(id.clone());
    tracing::info!("creating test bucket with a one week soft delete policy");
    let _ = client
        .create_bucket()
        .set_parent("projects/_")
        .set_bucket_id(&id)
        .set_bucket(
            Bucket::new()
                .set_project(format!("projects/{project_id}"))
                .set_soft_delete_policy(
                    SoftDeletePolicy::new()
                        .set_retention_duration(google_cloud_wkt::Duration::clamp(
                            WEEK_IN_SECONDS,
                            0,
                        )),
                ),
        )
        .send()
        .await
        .with_context(|| format!("creating bucket {id}"))?;

    let mut w = std::io::stdout();
    tracing::info!("running get_soft_delete_policy example");
    get_soft_delete_policy::sample(&client, &mut w, &id).await?;
    tracing::info!("running disable_soft_delete_policy example");
    disable_soft_delete_policy::sample(&client, &mut w, &id).await?;
    tracing::info!("running get_soft_delete_policy example on the disabled bucket");
    get_soft_delete_policy::sample(&client, &mut w, &id).await?;

    Ok(())
}

pub async fn cleanup_bucket(client: &StorageControl, name: String) -> anyhow::Result<()> {
    client.delete_bucket().set_name(&name).send().await?;
    Ok(())
}

pub fn random_bucket_id() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const PREFIX: &str = "soft-delete-samples-";

    let mut rng = rand::rng();
    let suffix: String = (0..BUCKET_ID_LENGTH - PREFIX.len())
        .map(|_| char::from(CHARSET[rng.random_range(0..CHARSET.len())]))
        .collect();
    format!("{PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_bucket_id_shape() {
        let id = random_bucket_id();
        assert_eq!(id.len(), BUCKET_ID_LENGTH);
        assert!(id.starts_with("soft-delete-samples-"), "{id:?}");
        let suffix = &id["soft-delete-samples-".len()..];
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "{id:?} contains unexpected character"
        );
    }
}
