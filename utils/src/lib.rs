use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// read a cookie of the current document
pub fn get_cookie(name: &str) -> Option<String> {
    let cookies = document()
        .dyn_into::<HtmlDocument>()
        .ok()?
        .cookie()
        .map_err(|err| log::error!("read cookie error: {:?}", err))
        .ok()?;
    find_cookie(&cookies, name)
}

/// look `name` up in a `document.cookie` style string: `a=1; b=2`
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
