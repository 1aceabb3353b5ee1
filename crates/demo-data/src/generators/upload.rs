//! Upload generation.

use base64::{Engine, engine::general_purpose::STANDARD};
use rand::Rng;
use records::models::{Upload, UploadFileType};
use time::{Duration, OffsetDateTime};

use super::{future_within, past_within, pick};

const PLACEHOLDER_FILE_BODY: &str = "Hello demo data!!";

/// Base64 body shared by every generated upload.
pub fn placeholder_file_content() -> String {
    STANDARD.encode(PLACEHOLDER_FILE_BODY)
}

/// Generates an upload received within the year before `now`.
///
/// The processed timestamp always falls within the year after `now`.
pub fn generate_upload(rng: &mut impl Rng, now: OffsetDateTime) -> Upload {
    let file_type = pick(UploadFileType::ALL, rng);
    let upload_timestamp = past_within(now, Duration::days(365), rng);
    let processed_timestamp = future_within(now, Duration::days(365), rng);

    Upload {
        id: None,
        file_type,
        upload_timestamp,
        processed_timestamp,
        file_content: placeholder_file_content(),
    }
}

/// Generates multiple uploads.
pub fn generate_uploads(count: usize, rng: &mut impl Rng, now: OffsetDateTime) -> Vec<Upload> {
    (0..count).map(|_| generate_upload(rng, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_placeholder_content_is_base64() {
        let decoded = STANDARD.decode(placeholder_file_content()).unwrap();
        assert_eq!(decoded, PLACEHOLDER_FILE_BODY.as_bytes());
    }

    #[test]
    fn test_upload_timestamps_straddle_now() {
        let mut rng = StdRng::seed_from_u64(12345);
        let now = OffsetDateTime::now_utc();
        let year = Duration::days(365);

        for upload in generate_uploads(30, &mut rng, now) {
            assert!(upload.upload_timestamp <= now);
            assert!(upload.upload_timestamp >= now - year);
            assert!(upload.processed_timestamp > now);
            assert!(upload.processed_timestamp <= now + year);
            assert_eq!(upload.file_content, placeholder_file_content());
        }
    }
}
