pub trait ImageHostGateway {
    /// Uploads raw image bytes under the given file name and returns
    /// the public URL of the hosted copy.
    fn upload_image(&self, file_name: &str, bytes: &[u8]) -> anyhow::Result<String>;
}
