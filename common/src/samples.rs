//! 同梱サンプル
//!
//! 画面下部の「Examples」に表示する。表はライブ結果と同じパーサーで作る。

use crate::parser::parse_identification;
use crate::types::{ExampleEntry, IdentificationResult};

pub const EXAMPLES: &[ExampleEntry] = &[
    ExampleEntry {
        image_url: "/public/example-plant.svg",
        raw_text: "Name: Peace Lily\nScientific Name: Spathiphyllum\nCare: Low light, water when soil is dry\nOrigin: Tropical regions of America and Southeast Asia",
    },
    ExampleEntry {
        image_url: "https://placekitten.com/200/301",
        raw_text: "Name: Running Shoe\nBrand: Nike\nMaterial: Mesh and rubber\nUse: Sports and running",
    },
    ExampleEntry {
        image_url: "https://placekitten.com/200/302",
        raw_text: "Name: Laptop\nBrand: Apple\nModel: MacBook Pro\nFeatures: Retina display, Touch Bar",
    },
];

impl ExampleEntry {
    pub fn result(&self) -> IdentificationResult {
        parse_identification(self.raw_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_count() {
        assert_eq!(EXAMPLES.len(), 3);
    }

    #[test]
    fn test_examples_parse_every_line() {
        for example in EXAMPLES {
            let lines = example.raw_text.lines().count();
            assert_eq!(example.result().len(), lines, "{}", example.raw_text);
        }
    }

    #[test]
    fn test_examples_local_images_are_bundled() {
        // ローカル画像は web-wasm/public から Trunk でコピーされる
        let web_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../web-wasm");
        for example in EXAMPLES {
            if let Some(path) = example.image_url.strip_prefix('/') {
                assert!(path.starts_with("public/"), "{}", example.image_url);
                assert!(web_root.join(path).is_file(), "{} がありません", example.image_url);
            } else {
                assert!(example.image_url.starts_with("https://"), "{}", example.image_url);
            }
        }
    }

    #[test]
    fn test_example_peace_lily() {
        let result = EXAMPLES[0].result();
        assert_eq!(result.get("Name"), Some("Peace Lily"));
        assert_eq!(result.get("Scientific Name"), Some("Spathiphyllum"));
        assert_eq!(result.get("Care"), Some("Low light, water when soil is dry"));
    }
}
