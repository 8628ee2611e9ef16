use super::Presenter;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Presenter used whenever the requested name is missing or unknown
pub const DEFAULT_PRESENTER: &str = "alice";

const DEFAULT_PRESENTERS_URL: &str = "https://create-images-results.d-id.com/DefaultPresenters";

fn stock_presenter(name: &str, folder: &str) -> Presenter {
    Presenter {
        name: name.to_string(),
        image_url: format!("{}/{}/image.jpeg", DEFAULT_PRESENTERS_URL, folder),
    }
}

static PRESENTERS: LazyLock<Vec<Presenter>> = LazyLock::new(|| {
    vec![
        Presenter {
            name: "alice".to_string(),
            image_url: "https://d-id-public-bucket.s3.us-west-2.amazonaws.com/alice.jpg"
                .to_string(),
        },
        stock_presenter("amy", "Amy_f"),
        stock_presenter("noelle", "Noelle_f"),
        stock_presenter("william", "William_m"),
        stock_presenter("jack", "Jack_m"),
    ]
});

/// Static lookup of presenter names to source images.
///
/// Lookups never fail: unknown names resolve to [`DEFAULT_PRESENTER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenterCatalog;

impl PresenterCatalog {
    pub fn new() -> Self {
        debug_assert!(
            PRESENTERS.iter().any(|p| p.name == DEFAULT_PRESENTER),
            "Default presenter must be part of the catalog"
        );

        Self
    }

    /// Source image URL for `name`, falling back to the default presenter
    pub fn resolve(&self, name: Option<&str>) -> &'static str {
        let requested = name.map(str::trim).filter(|n| !n.is_empty());

        if let Some(presenter) = requested.and_then(|n| Self::find(n)) {
            return &presenter.image_url;
        }

        if let Some(unknown) = requested {
            tracing::info!(
                presenter = %unknown,
                fallback = DEFAULT_PRESENTER,
                "Unknown presenter requested, using default"
            );
        }

        Self::find(DEFAULT_PRESENTER)
            .or_else(|| PRESENTERS.first())
            .map(|p| p.image_url.as_str())
            .unwrap_or_default()
    }

    pub fn default_name(&self) -> &'static str {
        DEFAULT_PRESENTER
    }

    /// Presenter names in catalog order
    pub fn names(&self) -> Vec<&'static str> {
        PRESENTERS.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn as_map(&self) -> BTreeMap<String, String> {
        PRESENTERS
            .iter()
            .map(|p| (p.name.clone(), p.image_url.clone()))
            .collect()
    }

    fn find(name: &str) -> Option<&'static Presenter> {
        PRESENTERS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
