use anyhow::Result;
use dalil_core::{entities::Url, gateways::media::AudioHostingGateway};
use reqwest::blocking::multipart;
use serde::Deserialize;

use crate::check_response;

const SERVICE: &str = "Audio hosting";

/// Client of a simple file hosting service for voice messages.
#[derive(Debug, Clone)]
pub struct AudioHosting {
    upload_url: Url,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

impl AudioHosting {
    pub const fn new(upload_url: Url) -> Self {
        Self { upload_url }
    }
}

fn parse_upload_response(json: &str) -> Result<Url> {
    let UploadResponse { url } = serde_json::from_str(json)?;
    Ok(url.parse()?)
}

impl AudioHostingGateway for AudioHosting {
    fn upload_audio(&self, file_name: &str, data: Vec<u8>) -> Result<Url> {
        let part = multipart::Part::bytes(data).file_name(file_name.to_owned());
        let form = multipart::Form::new().part("file", part);
        let response = reqwest::blocking::Client::new()
            .post(self.upload_url.clone())
            .multipart(form)
            .send()?;
        let body = check_response(SERVICE, response)?.text()?;
        let url = parse_upload_response(&body)?;
        log::info!("Uploaded audio {file_name} to {url}");
        Ok(url)
    }
}
