use anyhow::Result;
use serde::Deserialize;

use bw_core::{
    entities::{Id, Timestamp},
    gateways::image_host::ImageHostGateway,
};

const UPLOAD_FOLDER: &str = "berlin-wandel";

/// Image uploads to a Cloudinary unsigned upload endpoint.
///
/// Uploads land in the `berlin-wandel` folder under a timestamped
/// public id, so repeated uploads of the same file never collide.
#[derive(Debug, Clone)]
pub struct Cloudinary {
    pub cloud_name: String,
    pub upload_preset: String,
}

impl Cloudinary {
    pub fn new(cloud_name: String, upload_preset: String) -> Self {
        Self {
            cloud_name,
            upload_preset,
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

impl ImageHostGateway for Cloudinary {
    fn upload_image(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        let public_id = unique_public_id(file_name, Timestamp::now());
        upload_raw(
            &self.upload_url(),
            &self.upload_preset,
            &public_id,
            file_name,
            bytes,
        )
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize, thiserror::Error)]
#[error("{}", .error.message)]
struct UploadError {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[cfg(not(test))]
fn upload_raw(
    url: &str,
    upload_preset: &str,
    public_id: &str,
    file_name: &str,
    bytes: &[u8],
) -> Result<String> {
    use reqwest::blocking::multipart::{Form, Part};

    let part = Part::bytes(bytes.to_vec()).file_name(file_name.to_owned());
    let form = Form::new()
        .text("upload_preset", upload_preset.to_owned())
        .text("folder", UPLOAD_FOLDER)
        .text("public_id", public_id.to_owned())
        .part("file", part);
    let client = reqwest::blocking::Client::new();
    let response = client.post(url).multipart(form).send()?;
    if response.status().is_success() {
        let uploaded: UploadResponse = response.json()?;
        Ok(uploaded.secure_url)
    } else {
        let upload_error: UploadError = response.json()?;
        Err(upload_error.into())
    }
}

/// Don't actually upload images while running the tests.
#[cfg(test)]
fn upload_raw(
    _url: &str,
    _upload_preset: &str,
    public_id: &str,
    file_name: &str,
    _bytes: &[u8],
) -> Result<String> {
    log::debug!("Would upload {file_name} as {public_id}");
    Ok(format!(
        "https://res.cloudinary.com/test/image/upload/{UPLOAD_FOLDER}/{public_id}.png"
    ))
}

/// Combines the upload time, a random suffix and the sanitized file
/// name into a collision-free public id.
fn unique_public_id(file_name: &str, now: Timestamp) -> String {
    let suffix: String = Id::new().as_str().chars().take(7).collect();
    format!(
        "{}_{}_{}",
        now.as_millis(),
        suffix,
        sanitize_file_name(file_name)
    )
}

/// Strips the file extension and turns whitespace runs into single
/// underscores.
fn sanitize_file_name(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && !ext.contains('/') => stem,
        _ => file_name,
    };
    let mut sanitized = String::with_capacity(stem.len());
    let mut in_whitespace = false;
    for c in stem.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                sanitized.push('_');
            }
            in_whitespace = true;
        } else {
            sanitized.push(c);
            in_whitespace = false;
        }
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_file_names() {
        assert_eq!(sanitize_file_name("brandenburger tor.jpg"), "brandenburger_tor");
        assert_eq!(sanitize_file_name("a  b\tc.png"), "a_b_c");
        assert_eq!(sanitize_file_name("no-extension"), "no-extension");
        assert_eq!(sanitize_file_name("archive.tar.gz"), "archive.tar");
        assert_eq!(sanitize_file_name("trailing-dot."), "trailing-dot.");
    }

    #[test]
    fn public_ids_are_unique_per_upload() {
        let now = Timestamp::from_millis(1_700_000_000_000);
        let a = unique_public_id("tor.jpg", now);
        let b = unique_public_id("tor.jpg", now);
        assert!(a.starts_with("1700000000000_"));
        assert!(a.ends_with("_tor"));
        assert_ne!(a, b);
    }

    #[test]
    fn uploads_answer_with_the_hosted_url() {
        let gw = Cloudinary::new("test".into(), "unsigned".into());
        let url = gw.upload_image("tor.jpg", &[1, 2, 3]).unwrap();
        assert!(url.starts_with("https://res.cloudinary.com/"));
        assert!(url.contains("/berlin-wandel/"));
    }
}
