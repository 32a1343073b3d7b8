use anyhow::bail;

use bw_core::gateways::image_host::ImageHostGateway;
use bw_gateways::cloudinary::Cloudinary;

use crate::config::{ImageHosting, ImageHostingGateway};

pub fn image_host_gateway(cfg: &ImageHosting) -> Box<dyn ImageHostGateway + Send + Sync> {
    match &cfg.gateway {
        Some(ImageHostingGateway::Cloudinary {
            cloud_name,
            upload_preset,
        }) => {
            log::info!("Use Cloudinary image hosting ({cloud_name})");
            Box::new(Cloudinary::new(cloud_name.clone(), upload_preset.clone()))
        }
        None => {
            log::warn!("No image hosting gateway was configured");
            Box::new(DummyImageHostGw)
        }
    }
}

struct DummyImageHostGw;

impl ImageHostGateway for DummyImageHostGw {
    fn upload_image(&self, file_name: &str, _bytes: &[u8]) -> anyhow::Result<String> {
        log::debug!("Cannot upload {file_name} because no image hosting gateway was configured");
        bail!("no image hosting gateway configured");
    }
}
