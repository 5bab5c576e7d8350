use image::{DynamicImage, RgbaImage};
use mandala_generator::{
    ai::{ImageGenerationService, MockImageClient},
    app::App,
    image::encode,
    models::InspirationWord,
    prompts,
    session::{Credential, Session},
};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::Path;

fn mandala_image(side: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(side, side, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgba([0, 0, 0, 255])
        } else {
            image::Rgba([255, 255, 255, 255])
        }
    }))
}

async fn run_session(input: &str, mock: MockImageClient, output_dir: &Path) -> (Session, String) {
    let app = App::with_services(Box::new(mock), output_dir.to_path_buf());
    let mut session = Session::new();
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut out: Vec<u8> = Vec::new();

    app.run(&mut session, &mut reader, &mut out).await.unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_full_workflow_with_mocks() {
    let word = InspirationWord::new("ocean").unwrap();
    let credential = Credential::new("sk-test").unwrap();

    // PromptBuilder keeps the word and the invariant template fields.
    let prompt = prompts::build(word.as_str());
    assert!(prompt.contains("ocean"));
    assert!(prompt.contains("black and white"));
    assert!(prompt.contains("symmetrical"));

    // Provider (mocked) turns the prompt into a decoded bitmap.
    let image_gen = MockImageClient::new().with_image_response(mandala_image(1024));
    let image = image_gen.generate_image(&prompt, &credential).await.unwrap();
    assert_eq!((image.width(), image.height()), (1024, 1024));

    // Download encoding round-trips to a pixel-identical bitmap.
    use base64::Engine as _;
    let uri = encode::to_data_uri(&image).unwrap();
    let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.to_rgba8(), image.to_rgba8());
}

#[tokio::test]
async fn test_session_scenario_ocean() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockImageClient::new().with_image_response(mandala_image(1024));
    let probe = mock.clone();

    let (session, output) = run_session("sk-test\nocean\n:save\n:quit\n", mock, dir.path()).await;

    assert_eq!(probe.get_call_count(), 1);
    let prompt = probe.last_prompt().unwrap();
    assert!(prompt.contains("ocean"));
    assert!(prompt.contains("black and white"));

    let last = session.last_image().unwrap();
    assert_eq!(last.image().width(), 1024);
    assert_eq!(last.image().height(), 1024);

    assert!(output.contains("Mandala generated in"));
    assert!(dir.path().join("mandala_ocean.png").exists());
}

#[tokio::test]
async fn test_session_scenario_empty_word_makes_no_calls() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockImageClient::new();
    let probe = mock.clone();

    let (session, output) = run_session("sk-test\n   \n:quit\n", mock, dir.path()).await;

    assert!(output.contains("Please enter an inspiration word."));
    assert!(session.last_image().is_none());
    assert_eq!(probe.get_call_count(), 0);
}

#[tokio::test]
async fn test_session_scenario_no_credential_blocks_generation() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockImageClient::new();
    let probe = mock.clone();

    // The user never supplies a key; input runs out at the key prompt.
    let (session, output) = run_session("\n", mock, dir.path()).await;

    assert!(session.credential().is_none());
    assert!(output.contains("Enter your OpenAI API key"));
    assert!(!output.contains("Enter a word for inspiration"));
    assert_eq!(probe.get_call_count(), 0);
}

#[tokio::test]
async fn test_failed_generation_preserves_previous_mandala() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockImageClient::new()
        .with_image_response(mandala_image(32))
        .with_error_response("quota exhausted");
    let probe = mock.clone();

    let (session, output) = run_session("sk-test\nocean\nstorm\n:quit\n", mock, dir.path()).await;

    assert_eq!(probe.get_call_count(), 2);
    assert!(output.contains("Error generating image:"));

    let last = session.last_image().unwrap();
    assert_eq!(last.word().as_str(), "ocean");
}

#[tokio::test]
async fn test_download_filename_follows_word() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockImageClient::new().with_image_response(mandala_image(16));

    let (_session, output) = run_session("sk-test\nharmony\n:save\n:quit\n", mock, dir.path()).await;

    assert!(output.contains("mandala_harmony.png"));
    let saved = dir.path().join("mandala_harmony.png");
    let reloaded = image::open(&saved).unwrap();
    assert_eq!(reloaded.to_rgba8(), mandala_image(16).to_rgba8());
}
