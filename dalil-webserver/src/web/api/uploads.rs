use std::sync::Arc;

use rocket::{
    data::{Data, ToByteUnit},
    tokio::task::spawn_blocking,
};

use super::*;

async fn read_file(data: Data<'_>, limit: u64) -> result::Result<Vec<u8>, ApiError> {
    let file = data.open(limit.bytes()).into_bytes().await?;
    if !file.is_complete() {
        return Err(ApiError::payload_too_large(limit));
    }
    let file = file.into_inner();
    if file.is_empty() {
        return Err(ApiError::OtherWithStatus(
            anyhow::anyhow!("The uploaded file is empty"),
            Status::BadRequest,
        ));
    }
    Ok(file)
}

#[post("/upload/image?<file_name>", data = "<data>")]
pub async fn post_image(
    account: Account,
    cfg: &State<Cfg>,
    image_hosting: &State<ImageHosting>,
    file_name: String,
    data: Data<'_>,
) -> Result<json::UploadedFile> {
    let file = read_file(data, cfg.max_image_size).await?;
    let gateway = Arc::clone(&image_hosting.0);
    debug!("User {} uploads image {file_name}", account.email());
    let url = spawn_blocking(move || flows::upload_image(&*gateway, &file_name, file)).await??;
    Ok(Json(json::UploadedFile { url: url.into() }))
}

/// Voice messages
#[post("/upload/audio?<file_name>", data = "<data>")]
pub async fn post_audio(
    account: Account,
    cfg: &State<Cfg>,
    audio_hosting: &State<AudioHosting>,
    file_name: String,
    data: Data<'_>,
) -> Result<json::UploadedFile> {
    let file = read_file(data, cfg.max_audio_size).await?;
    let gateway = Arc::clone(&audio_hosting.0);
    debug!("User {} uploads audio {file_name}", account.email());
    let url = spawn_blocking(move || flows::upload_audio(&*gateway, &file_name, file)).await??;
    Ok(Json(json::UploadedFile { url: url.into() }))
}

#[post("/upload/video?<title>", data = "<data>")]
pub async fn post_video(
    db: sqlite::Connections,
    account: Account,
    cfg: &State<Cfg>,
    video_hosting: &State<VideoHosting>,
    title: String,
    data: Data<'_>,
) -> Result<json::UploadedFile> {
    let file = read_file(data, cfg.max_video_size).await?;
    let gateway = Arc::clone(&video_hosting.0);
    debug!("User {} uploads video '{title}'", account.email());
    let url = spawn_blocking(move || flows::upload_video(&db, &*gateway, &title, file)).await??;
    Ok(Json(json::UploadedFile { url: url.into() }))
}

#[post("/products/<id>/images/upload?<file_name>", data = "<data>")]
pub async fn post_product_image_upload(
    db: sqlite::Connections,
    account: Account,
    cfg: &State<Cfg>,
    image_hosting: &State<ImageHosting>,
    id: String,
    file_name: String,
    data: Data<'_>,
) -> Result<json::ProductMedia> {
    let file = read_file(data, cfg.max_image_size).await?;
    let gateway = Arc::clone(&image_hosting.0);
    let media = spawn_blocking(move || {
        let user = account.user(&db.shared()?)?;
        let media = flows::upload_product_image(&db, &*gateway, &user, &id, &file_name, file)?;
        Ok::<_, ApiError>(media)
    })
    .await??;
    Ok(Json(media.into()))
}

#[post("/products/<id>/videos/upload?<title>", data = "<data>")]
pub async fn post_product_video_upload(
    db: sqlite::Connections,
    account: Account,
    cfg: &State<Cfg>,
    video_hosting: &State<VideoHosting>,
    id: String,
    title: String,
    data: Data<'_>,
) -> Result<json::ProductMedia> {
    let file = read_file(data, cfg.max_video_size).await?;
    let gateway = Arc::clone(&video_hosting.0);
    let media = spawn_blocking(move || {
        let user = account.user(&db.shared()?)?;
        let media = flows::upload_product_video(&db, &*gateway, &user, &id, &title, file)?;
        Ok::<_, ApiError>(media)
    })
    .await??;
    Ok(Json(media.into()))
}
