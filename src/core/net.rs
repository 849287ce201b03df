/// Read the response body as text, mapping unsuccessful statuses to
/// [`FmpError::Status`] first.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, crate::core::FmpError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(crate::core::FmpError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp.text().await?)
}
