// Expander behaviour over the built-in thesaurus and config entries

use crate::common::{expand_offline, offline_config};
use ctxbundle::core::expansion::TermExpander;

#[tokio::test]
async fn test_image_expands_to_curated_terms() {
    let keywords = expand_offline(&["image"]).await;

    for term in ["image", "img", "upload", "cloudinary", "multer"] {
        assert!(keywords.contains(term), "missing '{term}'");
    }
}

#[tokio::test]
async fn test_input_is_subset_of_expansion() {
    let inputs = ["Server", "auth", "websocket"];
    let keywords = expand_offline(&inputs).await;

    for word in inputs {
        assert!(keywords.contains(&word.to_lowercase()));
    }
}

#[tokio::test]
async fn test_multi_word_input() {
    let keywords = expand_offline(&["image server"]).await;

    assert!(keywords.contains("thumbnail"));
    assert!(keywords.contains("express"));
}

#[tokio::test]
async fn test_empty_input_gives_empty_set() {
    assert!(expand_offline(&[]).await.is_empty());
    assert!(expand_offline(&["", "   "]).await.is_empty());
}

#[tokio::test]
async fn test_config_thesaurus_extends_builtin() {
    let mut config = offline_config();
    config
        .thesaurus
        .insert("image".to_string(), vec!["Sharp".to_string()]);
    config
        .thesaurus
        .insert("payment".to_string(), vec!["stripe".to_string()]);

    let expander = TermExpander::from_config(&config).unwrap();

    let image = expander.expand(&["image"]).await;
    assert!(image.contains("sharp"));
    assert!(image.contains("cloudinary"));

    let payment = expander.expand(&["payment"]).await;
    assert!(payment.contains("stripe"));
}

#[tokio::test]
async fn test_offline_config_has_no_providers() {
    let expander = TermExpander::from_config(&offline_config()).unwrap();
    assert!(expander.provider_names().is_empty());
}
