use image::DynamicImage;
use world_dishes::{config::TranslatorConfig, imaging::MenuImage};

pub const TEST_API_KEY: &str = "test-api-key";

/// Translator settings pointing at `endpoint` with the stock image limits
pub fn create_test_translator_config(endpoint: &str) -> TranslatorConfig {
    TranslatorConfig::new(endpoint, TEST_API_KEY)
}

/// A gradient RGB image so the JPEG encoder has real content to work with
pub fn create_test_image(width: u32, height: u32) -> MenuImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x % 256) as u8);
            pixels.push((y % 256) as u8);
            pixels.push(((x + y) % 256) as u8);
        }
    }
    MenuImage::from_rgb(width, height, pixels).expect("valid test image")
}

pub fn create_empty_image() -> MenuImage {
    MenuImage::new(DynamicImage::new_rgb8(0, 0))
}

/// One part of a `multipart/form-data` body
#[derive(Debug, Clone)]
pub struct FormPart {
    pub headers: String,
    pub content: Vec<u8>,
}

impl FormPart {
    pub fn field_name(&self) -> Option<&str> {
        let start = self.headers.find("name=\"")? + "name=\"".len();
        let end = self.headers[start..].find('"')? + start;
        Some(&self.headers[start..end])
    }
}

/// Splits a `multipart/form-data` body into parts following RFC 7578 framing.
/// Panics if the framing is malformed.
pub fn parse_form_data(body: &[u8], boundary: &str) -> Vec<FormPart> {
    let delimiter = format!("--{}", boundary).into_bytes();
    let mut parts = Vec::new();

    assert!(body.starts_with(&delimiter), "body must open with the delimiter");
    let mut cursor = delimiter.len();

    loop {
        let rest = &body[cursor..];
        if rest == b"--\r\n" {
            break;
        }
        assert!(rest.starts_with(b"\r\n"), "delimiter must be followed by CRLF");
        let part_start = cursor + 2;

        let next = find(body, &delimiter, part_start).expect("missing closing delimiter");
        let part = &body[part_start..next];
        assert!(part.ends_with(b"\r\n"), "part must end with CRLF");
        let part = &part[..part.len() - 2];

        let split = find(part, b"\r\n\r\n", 0).expect("part headers must end with a blank line");
        parts.push(FormPart {
            headers: String::from_utf8(part[..split].to_vec()).expect("utf-8 headers"),
            content: part[split + 4..].to_vec(),
        });

        cursor = next + delimiter.len();
    }

    parts
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

pub const SAMPLE_MENU_RESPONSE: &str = r#"{
    "menu_lang_title": "Italian",
    "source_language": "it",
    "dishes": {
        "Tiramisù": {
            "translation": "Тирамису",
            "description": "Десерт из маскарпоне",
            "allergens": ["eggs", "milk"],
            "certified": true,
            "index": 2
        },
        "Bruschetta": {
            "translation": "Брускетта",
            "description": "Поджаренный хлеб с томатами",
            "allergens": ["gluten"],
            "index": 0
        },
        "Minestrone": {
            "translation": "Минестроне",
            "index": 1
        }
    }
}"#;
