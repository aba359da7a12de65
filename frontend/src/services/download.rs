use gloo::file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Hand bytes to the browser as a file download named `file_name`.
pub fn save_bytes(bytes: &[u8], mime_type: &str, file_name: &str) -> Result<(), String> {
    let blob = Blob::new_with_options(bytes, Some(mime_type));
    let url = ObjectUrl::from(blob);

    let anchor = gloo::utils::document()
        .create_element("a")
        .map_err(|_| "could not create download link".to_string())?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "download link is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    // `url` is revoked on drop, after the click has started the download
    Ok(())
}
