use super::*;

pub fn upload_image(
    image_hosting: &dyn ImageHostingGateway,
    file_name: &str,
    data: Vec<u8>,
) -> Result<Url> {
    let size = data.len();
    let url = image_hosting.upload_image(file_name, data).map_err(|err| {
        log::warn!("Failed to upload image {file_name} ({size} bytes): {err}");
        AppError::gateway(err)
    })?;
    debug!("Uploaded image {file_name} to {url}");
    Ok(url)
}

/// Upload a voice message or any other audio recording.
pub fn upload_audio(
    audio_hosting: &dyn AudioHostingGateway,
    file_name: &str,
    data: Vec<u8>,
) -> Result<Url> {
    let size = data.len();
    let url = audio_hosting.upload_audio(file_name, data).map_err(|err| {
        log::warn!("Failed to upload audio {file_name} ({size} bytes): {err}");
        AppError::gateway(err)
    })?;
    debug!("Uploaded audio {file_name} to {url}");
    Ok(url)
}
