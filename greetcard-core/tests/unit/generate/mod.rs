use super::*;

#[test]
fn new_year_request_uses_fixed_parameters() {
    let req = TextToImageRequest::new_year();
    assert_eq!(req.num_inference_steps, 25);
    assert!((req.guidance_scale - 7.5).abs() < f32::EPSILON);
    assert!(req.prompt.contains("New Year 2026"));
    assert_eq!(req.negative_prompt, "blurry, low quality, distorted, text, words");
    assert_eq!(req, TextToImageRequest::new_year());
}

#[test]
fn disabled_generator_always_errors() {
    let err = DisabledGenerator
        .generate(&TextToImageRequest::new_year())
        .unwrap_err();
    assert!(matches!(err, GenerationError::Disabled));
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(
        GenerationError::Status(503).to_string(),
        "service returned status 503"
    );
    assert!(
        GenerationError::MalformedResponse("json".into())
            .to_string()
            .starts_with("malformed response")
    );
}
