//! Page handlers and result rendering

use axum::response::Html;
use callshield_core::AnalysisResult;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const RESULT_MARKER: &str = "<!-- RESULT -->";

/// Landing page: upload form and QR code
pub async fn index() -> Html<String> {
    Html(INDEX_TEMPLATE.replace(RESULT_MARKER, ""))
}

/// Render the landing page with an analysis result embedded
pub fn render_result(result: &AnalysisResult) -> Html<String> {
    let (class, verdict) = if result.scam_detected {
        ("scam", "Scam detected: YES")
    } else {
        ("clean", "Scam detected: NO")
    };

    let transcription = if result.transcription.is_empty() {
        "(no transcript available)".to_string()
    } else {
        escape_html(&result.transcription)
    };

    let keywords = if result.keywords_found.is_empty() {
        "none".to_string()
    } else {
        escape_html(&result.keywords_found.join(", "))
    };

    let fragment = format!(
        r#"<section class="result {class}">
        <h2>{verdict}</h2>
        <p><strong>Transcription:</strong> {transcription}</p>
        <p><strong>Keywords found:</strong> {keywords}</p>
        <p><strong>Emotion detected:</strong> {emotion}</p>
    </section>"#,
        emotion = result.emotion_detected,
    );

    Html(INDEX_TEMPLATE.replace(RESULT_MARKER, &fragment))
}

/// Minimal HTML escaping for user-derived text
fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
