use crate::shared::api_utils::api_base;
use contracts::domain::clothes::aggregate::NewClothes;
use contracts::shared::action_result::ActionResult;

/// The parent collection the dialog creates variants in
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionRef {
    pub id: String,
    pub name: String,
}

/// Submit one new clothes variant as a multipart request: the structured
/// payload as a JSON part plus the raw image file.
pub async fn create_clothes(
    collection_id: &str,
    payload: &NewClothes,
    image: Option<web_sys::File>,
) -> Result<ActionResult, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let json_payload = serde_json::to_string(payload).map_err(|e| format!("{e}"))?;

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_str("payload", &json_payload)
        .map_err(|e| format!("{e:?}"))?;
    if let Some(file) = image {
        form_data
            .append_with_blob("image", &file)
            .map_err(|e| format!("{e:?}"))?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = format!("{}/api/collection/{}/clothes", api_base(), collection_id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let result: ActionResult = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(result)
}
