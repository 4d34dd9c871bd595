use crate::entities::Url;

pub trait ImageHostingGateway {
    /// Upload an image and return its public URL.
    fn upload_image(&self, file_name: &str, data: Vec<u8>) -> anyhow::Result<Url>;
}

pub trait AudioHostingGateway {
    /// Upload an audio recording and return its public URL.
    fn upload_audio(&self, file_name: &str, data: Vec<u8>) -> anyhow::Result<Url>;
}
