//! Request fixtures: hand-rolled multipart bodies and upstream envelopes.

const BOUNDARY: &str = "sonic-test-boundary";

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Build a multipart body with an optional `audio` file part and optional
/// `title`/`artist` text parts.
pub fn multipart_body(
    audio: Option<&[u8]>,
    title: Option<&str>,
    artist: Option<&str>,
) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some(data) = audio {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"audio\"; filename=\"song.mp3\"\r\nContent-Type: audio/mpeg\r\n\r\n",
                BOUNDARY
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    for (name, value) in [("title", title), ("artist", artist)] {
        if let Some(value) = value {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    BOUNDARY, name, value
                )
                .as_bytes(),
            );
        }
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Upstream `sendAudio` success envelope.
pub fn send_audio_ok(file_id: &str, duration: Option<u32>, file_size: Option<u64>) -> String {
    let mut audio = serde_json::json!({ "file_id": file_id });
    if let Some(duration) = duration {
        audio["duration"] = serde_json::json!(duration);
    }
    if let Some(file_size) = file_size {
        audio["file_size"] = serde_json::json!(file_size);
    }
    serde_json::json!({
        "ok": true,
        "result": { "message_id": 42, "audio": audio }
    })
    .to_string()
}

/// Upstream `getFile` success envelope.
pub fn get_file_ok(file_path: &str) -> String {
    serde_json::json!({
        "ok": true,
        "result": { "file_path": file_path }
    })
    .to_string()
}

/// Upstream refusal envelope (`ok: false`).
pub fn not_ok(description: &str) -> String {
    serde_json::json!({
        "ok": false,
        "error_code": 400,
        "description": description
    })
    .to_string()
}
