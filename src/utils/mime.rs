use std::path::Path;

/// Guess a media type from the file extension.
/// The widget only cares whether the result is `image/*`; everything else is
/// reported so validation can phrase a useful rejection.
pub fn guess_media_type(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    let media_type = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        "avif" => "image/avif",
        "heic" => "image/heic",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        _ => return None,
    };

    Some(media_type.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn guesses_common_image_types() {
        assert_eq!(
            guess_media_type(&PathBuf::from("photo.PNG")).as_deref(),
            Some("image/png")
        );
        assert_eq!(
            guess_media_type(&PathBuf::from("selfie.jpeg")).as_deref(),
            Some("image/jpeg")
        );
        assert_eq!(
            guess_media_type(&PathBuf::from("anim.gif")).as_deref(),
            Some("image/gif")
        );
    }

    #[test]
    fn non_image_types_are_not_images() {
        let mt = guess_media_type(&PathBuf::from("notes.txt")).unwrap();
        assert!(!mt.starts_with("image/"));
    }

    #[test]
    fn unknown_extension_gives_none() {
        assert_eq!(guess_media_type(&PathBuf::from("archive.xyz")), None);
        assert_eq!(guess_media_type(&PathBuf::from("no_extension")), None);
    }
}
