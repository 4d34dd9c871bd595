use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, Result};
use dalil_core::{entities::Url, gateways::media::ImageHostingGateway};
use reqwest::blocking::multipart;
use serde::Deserialize;

use crate::check_response;

const SERVICE: &str = "Image hosting";

// Shared by all clients of the process to spread the
// requests evenly over the configured keys.
static NEXT_KEY: AtomicUsize = AtomicUsize::new(0);

/// Client of an ImgBB compatible image hosting service.
#[derive(Debug, Clone)]
pub struct ImageHosting {
    api_url: Url,
    api_keys: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: UploadedImage,
}

#[derive(Debug, Deserialize)]
struct UploadedImage {
    url: String,
}

impl ImageHosting {
    pub fn new(api_url: Url, api_keys: Vec<String>) -> Result<Self> {
        if api_keys.is_empty() {
            return Err(anyhow!("At least one image hosting API key is required"));
        }
        Ok(Self { api_url, api_keys })
    }

    fn next_key(&self) -> &str {
        let index = NEXT_KEY.fetch_add(1, Ordering::Relaxed) % self.api_keys.len();
        &self.api_keys[index]
    }
}

fn parse_upload_response(json: &str) -> Result<Url> {
    let response: UploadResponse = serde_json::from_str(json)?;
    Ok(response.data.url.parse()?)
}

impl ImageHostingGateway for ImageHosting {
    fn upload_image(&self, file_name: &str, data: Vec<u8>) -> Result<Url> {
        let part = multipart::Part::bytes(data).file_name(file_name.to_owned());
        let form = multipart::Form::new().part("image", part);
        log::debug!("Uploading image {file_name}");
        let response = reqwest::blocking::Client::new()
            .post(self.api_url.clone())
            .query(&[("key", self.next_key())])
            .multipart(form)
            .send()?;
        let body = check_response(SERVICE, response)?.text()?;
        let url = parse_upload_response(&body)?;
        log::info!("Uploaded image {file_name} to {url}");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_at_least_one_key() {
        let api_url: Url = "https://api.imgbb.com/1/upload".parse().unwrap();
        assert!(ImageHosting::new(api_url, vec![]).is_err());
    }

    #[test]
    fn rotate_keys() {
        let api_url: Url = "https://api.imgbb.com/1/upload".parse().unwrap();
        let gw = ImageHosting::new(api_url, vec!["a".into(), "b".into(), "c".into()]).unwrap();
        let keys: Vec<_> = (0..6).map(|_| gw.next_key().to_owned()).collect();
        // Other tests may use the shared index concurrently,
        // so only check that every key gets used.
        for key in ["a", "b", "c"] {
            assert!(keys.iter().any(|k| k == key));
        }
    }

    #[test]
    fn keep_the_returned_url_verbatim() {
        let json = r#"{
            "data": {
                "id": "2ndCYJK",
                "url": "https://i.ibb.co/w04Prt6/c1f64245afb2.gif",
                "display_url": "https://i.ibb.co/98W13PY/c1f64245afb2.gif"
            },
            "success": true,
            "status": 200
        }"#;
        assert_eq!(
            "https://i.ibb.co/w04Prt6/c1f64245afb2.gif",
            parse_upload_response(json).unwrap().as_str()
        );
    }

    #[test]
    fn reject_responses_without_url() {
        assert!(parse_upload_response(r#"{"success":false}"#).is_err());
    }
}
