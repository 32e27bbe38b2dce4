use super::*;

#[test]
fn payload_matches_inference_api_shape() {
    let v = HfInferenceClient::payload(&TextToImageRequest::new_year());
    assert_eq!(v["inputs"], crate::generate::NEW_YEAR_PROMPT);
    assert_eq!(
        v["parameters"]["negative_prompt"],
        crate::generate::NEW_YEAR_NEGATIVE_PROMPT
    );
    assert_eq!(v["parameters"]["num_inference_steps"], 25);
    assert_eq!(v["parameters"]["guidance_scale"], 7.5);
}

#[test]
fn endpoint_joins_base_and_model() {
    let client = HfInferenceClient::new().with_base_url("http://localhost:9000/models/");
    assert_eq!(
        client.endpoint(),
        "http://localhost:9000/models/stabilityai/stable-diffusion-xl-base-1.0"
    );
    assert_eq!(
        HfInferenceClient::new().with_model("x/y").endpoint(),
        format!("{DEFAULT_INFERENCE_URL}/x/y")
    );
}

#[test]
fn debug_redacts_token() {
    let client = HfInferenceClient::new().with_token(Some("hf_secret".to_string()));
    let dbg = format!("{client:?}");
    assert!(!dbg.contains("hf_secret"));
    assert!(dbg.contains("<redacted>"));
}

#[test]
fn blank_token_is_dropped() {
    let client = HfInferenceClient::new().with_token(Some("  ".to_string()));
    assert!(!format!("{client:?}").contains("<redacted>"));
}

#[test]
fn image_responses_are_accepted() {
    let png = b"\x89PNG\r\n\x1a\n0000".to_vec();
    assert!(check_image_response(Some("image/jpeg"), vec![1, 2, 3]).is_ok());
    assert!(check_image_response(None, png.clone()).is_ok());
    assert!(check_image_response(Some("application/octet-stream"), png).is_ok());
}

#[test]
fn json_and_empty_responses_are_malformed() {
    let err = check_image_response(
        Some("application/json"),
        br#"{"error":"Model is currently loading"}"#.to_vec(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("Model is currently loading"));

    assert!(matches!(
        check_image_response(Some("image/png"), Vec::new()),
        Err(GenerationError::MalformedResponse(_))
    ));
    assert!(matches!(
        check_image_response(Some("text/html"), b"<html>".to_vec()),
        Err(GenerationError::MalformedResponse(_))
    ));
}

#[test]
fn unreachable_endpoint_is_a_transport_error() {
    let client = HfInferenceClient::new()
        .with_base_url("http://127.0.0.1:9")
        .with_timeout(std::time::Duration::from_secs(2));
    let err = client.generate(&TextToImageRequest::new_year()).unwrap_err();
    assert!(matches!(err, GenerationError::Transport(_)));
}
