//! Chat - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::shared::chat::{ChatReply, ChatRequest, CHAT_ENDPOINT};

/// Отправить сообщение.
///
/// Error statuses still carry a JSON body (`{"error": ...}`), so the body is
/// parsed whatever the status. `Err` means transport failure or a body that
/// is not JSON.
pub async fn post_chat(message: &str) -> Result<ChatReply, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let url = api_url(CHAT_ENDPOINT);
    let dto = serde_json::to_string(&ChatRequest::new(message)).map_err(|e| format!("{e}"))?;
    let body = wasm_bindgen::JsValue::from_str(&dto);
    opts.set_body(&body);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        log::warn!("POST {} -> HTTP {}", url, resp.status());
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: ChatReply = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}
