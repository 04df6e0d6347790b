use crate::models::requests::{Profile, ProfilePayload};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while building the matching payload
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to read resume {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// MIME type for a resume file, from its extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("odt") => "application/vnd.oasis.opendocument.text",
        Some("rtf") => "application/rtf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Encode raw bytes as a `data:<mime>;base64,<payload>` URL
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read a resume file completely and encode it as a data URL
pub async fn encode_resume(path: &Path) -> Result<String, CodecError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CodecError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Encoded resume {} ({} bytes)", path.display(), bytes.len());

    Ok(to_data_url(mime_for_path(path), &bytes))
}

/// Build the wire payload for a submitted profile
///
/// The resume is read before anything else is returned; a read failure means
/// no payload exists at all.
pub async fn encode(profile: &Profile) -> Result<ProfilePayload, CodecError> {
    let resume = match profile.resume.as_deref() {
        Some(path) => Some(encode_resume(path).await?),
        None => None,
    };

    let urls: Vec<String> = profile
        .urls
        .iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect();

    Ok(ProfilePayload {
        first_name: profile.first_name.clone(),
        last_name: profile.last_name.clone(),
        email: profile.email.clone(),
        interests: profile.interests.clone(),
        resume,
        urls: if urls.is_empty() { None } else { Some(urls) },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(urls: Vec<&str>) -> Profile {
        Profile {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            urls: urls.into_iter().map(String::from).collect(),
            resume: None,
            interests: vec!["x".to_string(), "y".to_string(), "z".to_string()],
        }
    }

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for_path(Path::new("cv.PDF")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("cv.doc")), "application/msword");
        assert_eq!(mime_for_path(Path::new("cv")), "application/octet-stream");
    }

    #[test]
    fn test_data_url() {
        assert_eq!(to_data_url("text/plain", b"hi"), "data:text/plain;base64,aGk=");
    }

    #[test]
    fn test_blank_urls_omitted() {
        let payload = tokio_test::block_on(encode(&profile(vec!["", "  "]))).unwrap();
        assert!(payload.urls.is_none());
    }

    #[test]
    fn test_urls_kept_when_present() {
        let payload =
            tokio_test::block_on(encode(&profile(vec!["", "https://example.com"]))).unwrap();
        assert_eq!(payload.urls, Some(vec!["https://example.com".to_string()]));
    }

    #[test]
    fn test_missing_resume_fails() {
        let mut p = profile(vec![]);
        p.resume = Some(PathBuf::from("/definitely/not/here/resume.pdf"));

        let err = tokio_test::block_on(encode(&p)).unwrap_err();
        assert!(matches!(err, CodecError::FileRead { .. }));
    }
}
