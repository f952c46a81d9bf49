use crate::error::{AmiError, Result};
use crate::provider::{AccessDenied, ImageProvider};

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ec2 as ec2;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_types::region::Region;
use serde_json::{json, Map as JsonMap, Value};

/// The real provider: one EC2 client per region, credentials and endpoints
/// resolved from the ambient AWS environment.
pub struct Ec2ImageProvider;

impl Ec2ImageProvider {
    pub fn new() -> Self {
        Self
    }

    fn image_to_json(image: &ec2::types::Image) -> Value {
        let mut obj = JsonMap::new();
        if let Some(id) = image.image_id() {
            obj.insert("ImageId".into(), json!(id));
        }
        if let Some(name) = image.name() {
            obj.insert("Name".into(), json!(name));
        }
        if let Some(state) = image.state() {
            obj.insert("State".into(), json!(state.as_str()));
        }
        if let Some(created) = image.creation_date() {
            obj.insert("CreationDate".into(), json!(created));
        }
        if let Some(public) = image.public() {
            obj.insert("Public".into(), json!(public));
        }
        if let Some(description) = image.description() {
            obj.insert("Description".into(), json!(description));
        }
        if !image.tags().is_empty() {
            let tags: Vec<Value> = image
                .tags()
                .iter()
                .map(|t| json!({"Key": t.key(), "Value": t.value()}))
                .collect();
            obj.insert("Tags".into(), Value::Array(tags));
        }
        Value::Object(obj)
    }
}

impl Default for Ec2ImageProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProvider for Ec2ImageProvider {
    async fn regions(&self) -> Result<Vec<String>> {
        let conf = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = ec2::Client::new(&conf);

        let out = client
            .describe_regions()
            .send()
            .await
            .map_err(|e| AmiError::ProviderError(format!("{}", DisplayErrorContext(&e))))?;

        let mut regions = vec![];
        for r in out.regions() {
            if let Some(name) = r.region_name() {
                regions.push(name.to_string());
            }
        }
        Ok(regions)
    }

    async fn owned_images(&self, region: &str) -> std::result::Result<Value, AccessDenied> {
        let conf = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        let client = ec2::Client::new(&conf);

        // Any per-region failure (disabled region, auth) reads as a denial;
        // there is no retry at this layer.
        match client.describe_images().owners("self").send().await {
            Ok(resp) => {
                let images: Vec<Value> = resp.images().iter().map(Self::image_to_json).collect();
                Ok(json!({ "Images": images }))
            }
            Err(e) => Err(AccessDenied {
                reason: format!("{}", DisplayErrorContext(&e)),
            }),
        }
    }
}
