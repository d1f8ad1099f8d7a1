//! A stylist conversation.
//!
//! A session starts with a greeting and moves between idle and pending as
//! requests go out and come back. Requests may overlap; each reply is
//! appended when it arrives. Failures become a fixed apology line, never an
//! error.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use luxe_commerce::catalog::Product;
use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::parse::{recommend_or_fallback, resolve_products};
use crate::service::StylingService;
use crate::types::{ChatTurn, Complements, ImagePayload, RequestKind, StylistMessage};

/// Greeting when no product is being viewed.
pub const GENERIC_GREETING: &str = "Hello! I am your Lumina Luxe personal AI stylist. Looking for a specific look, or need advice on what to wear to a special event?";

/// Transcript marker for an uploaded image.
pub const VISUAL_SEARCH_MARKER: &str = "[Visual Search Image Uploaded]";

/// Reply when an advice request fails.
pub const ADVICE_FAILURE: &str =
    "I apologize, but I am unable to access the catalog right now. Please try again in a moment.";

/// Reply when a visual search fails.
pub const VISUAL_FAILURE: &str =
    "My visual scanners are slightly foggy. Could you try a different photo?";

/// Opening line, personalised when a product is being viewed.
pub fn greeting(viewing: Option<&Product>) -> String {
    match viewing {
        Some(p) => format!(
            "I see you're looking at the {}. It's an exquisite choice! How can I help you style it today?",
            p.name
        ),
        None => GENERIC_GREETING.to_string(),
    }
}

/// Whether a request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Pending { in_flight: usize },
}

struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// One open stylist panel.
pub struct StylistSession<S: StylingService + ?Sized> {
    service: Arc<S>,
    transcript: Mutex<Vec<StylistMessage>>,
    in_flight: AtomicUsize,
    complements: OnceCell<Complements>,
}

impl<S: StylingService + ?Sized> StylistSession<S> {
    /// Open a session whose transcript holds only the greeting.
    pub fn open(service: Arc<S>, viewing: Option<&Product>) -> Self {
        Self {
            service,
            transcript: Mutex::new(vec![StylistMessage::model(greeting(viewing))]),
            in_flight: AtomicUsize::new(0),
            complements: OnceCell::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        match self.in_flight.load(Ordering::SeqCst) {
            0 => SessionState::Idle,
            n => SessionState::Pending { in_flight: n },
        }
    }

    /// Copy of the conversation so far.
    pub fn transcript(&self) -> Vec<StylistMessage> {
        self.transcript.lock().clone()
    }

    fn push(&self, message: StylistMessage) -> StylistMessage {
        self.transcript.lock().push(message.clone());
        message
    }

    /// Ask for advice. Blank input is ignored and returns `None`.
    ///
    /// The model sees every earlier line as history, but not this one.
    pub async fn send(&self, text: &str, catalog: &[Product]) -> Option<StylistMessage> {
        if text.trim().is_empty() {
            return None;
        }

        let history: Vec<ChatTurn> = {
            let mut transcript = self.transcript.lock();
            let history = transcript.iter().map(StylistMessage::turn).collect();
            transcript.push(StylistMessage::user(text));
            history
        };

        let _guard = InFlight::start(&self.in_flight);
        let reply = match self.service.advise(text, catalog, &history).await {
            Ok(rec) => {
                let products = resolve_products(&rec, catalog);
                debug!(products = products.len(), "Stylist advice received");
                StylistMessage::model(rec.reasoning).with_products(products)
            }
            Err(e) => {
                warn!(error = %e, "Stylist advice failed");
                StylistMessage::model(ADVICE_FAILURE)
            }
        };
        Some(self.push(reply))
    }

    /// Search the catalog by image. No conversation history is sent.
    pub async fn visual_search(&self, image: &ImagePayload, catalog: &[Product]) -> StylistMessage {
        self.push(StylistMessage::user(VISUAL_SEARCH_MARKER));

        let _guard = InFlight::start(&self.in_flight);
        let reply = match self.service.visual_search(image, catalog).await {
            Ok(rec) => {
                let products = resolve_products(&rec, catalog);
                debug!(products = products.len(), "Visual search matched");
                StylistMessage::model(rec.reasoning).with_products(products)
            }
            Err(e) => {
                warn!(error = %e, "Visual search failed");
                StylistMessage::model(VISUAL_FAILURE)
            }
        };
        self.push(reply)
    }

    /// Items that complete the look for `product`.
    ///
    /// The lookup runs once per session; later calls return the first result
    /// whatever product they pass. Failures fall back to a generic note with
    /// no products.
    pub async fn load_complements(&self, product: &Product, catalog: &[Product]) -> Complements {
        self.complements
            .get_or_init(|| async move {
                let _guard = InFlight::start(&self.in_flight);
                let result = self.service.suggest_complements(product, catalog).await;
                let rec = recommend_or_fallback(RequestKind::Complements, result);
                Complements {
                    products: resolve_products(&rec, catalog),
                    reasoning: rec.reasoning,
                }
            })
            .await
            .clone()
    }

    /// The cached complements, if the lookup has finished.
    pub fn complements(&self) -> Option<&Complements> {
        self.complements.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StylistError;
    use crate::types::{ChatRole, StylingRecommendation};
    use async_trait::async_trait;
    use luxe_commerce::seed;

    #[derive(Default)]
    struct ScriptedService {
        fail: bool,
        advise_calls: AtomicUsize,
        complement_calls: AtomicUsize,
        last_history: Mutex<Vec<ChatTurn>>,
    }

    #[async_trait]
    impl StylingService for ScriptedService {
        async fn advise(
            &self,
            _query: &str,
            _catalog: &[Product],
            history: &[ChatTurn],
        ) -> Result<StylingRecommendation, StylistError> {
            self.advise_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_history.lock() = history.to_vec();
            if self.fail {
                return Err(StylistError::EmptyResponse);
            }
            Ok(StylingRecommendation::new(
                "Try the blazer with the boots.",
                vec!["3".to_string(), "1".to_string(), "missing".to_string()],
            ))
        }

        async fn visual_search(
            &self,
            _image: &ImagePayload,
            _catalog: &[Product],
        ) -> Result<StylingRecommendation, StylistError> {
            if self.fail {
                return Err(StylistError::MalformedRecommendation("bad".to_string()));
            }
            Ok(StylingRecommendation::new("Flowing silhouette.", vec!["2".to_string()]))
        }

        async fn suggest_complements(
            &self,
            _product: &Product,
            _catalog: &[Product],
        ) -> Result<StylingRecommendation, StylistError> {
            self.complement_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(StylistError::EmptyResponse);
            }
            Ok(StylingRecommendation::new("Boots ground the look.", vec!["3".to_string()]))
        }
    }

    fn image() -> ImagePayload {
        ImagePayload::new("image/jpeg", "aGVsbG8=")
    }

    #[test]
    fn test_greetings() {
        let catalog = seed::catalog();
        assert_eq!(
            greeting(Some(&catalog[0])),
            "I see you're looking at the Midnight Silk Blazer. It's an exquisite choice! How can I help you style it today?"
        );
        assert_eq!(greeting(None), GENERIC_GREETING);
    }

    #[tokio::test]
    async fn test_send_appends_turns_and_resolves_products() {
        let service = Arc::new(ScriptedService::default());
        let session = StylistSession::open(Arc::clone(&service), None);
        let catalog = seed::catalog();

        let reply = session.send("Something for a gala", &catalog).await.unwrap();
        let ids: Vec<_> = reply.products.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].role, ChatRole::User);
        assert_eq!(transcript[2].text, "Try the blazer with the boots.");

        // History is the greeting only, not the new question.
        let history = service.last_history.lock().clone();
        assert_eq!(history, vec![ChatTurn::model(GENERIC_GREETING)]);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn test_blank_input_ignored() {
        let service = Arc::new(ScriptedService::default());
        let session = StylistSession::open(Arc::clone(&service), None);
        assert!(session.send("   ", &seed::catalog()).await.is_none());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(service.advise_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failure_appends_apology() {
        let service = Arc::new(ScriptedService {
            fail: true,
            ..Default::default()
        });
        let session = StylistSession::open(service, None);
        let catalog = seed::catalog();

        let reply = session.send("Help", &catalog).await.unwrap();
        assert_eq!(reply.text, ADVICE_FAILURE);
        assert!(reply.products.is_empty());

        let reply = session.visual_search(&image(), &catalog).await;
        assert_eq!(reply.text, VISUAL_FAILURE);
        let transcript = session.transcript();
        assert_eq!(transcript[3].text, VISUAL_SEARCH_MARKER);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn test_visual_search_success() {
        let session = StylistSession::open(Arc::new(ScriptedService::default()), None);
        let reply = session.visual_search(&image(), &seed::catalog()).await;
        assert_eq!(reply.products.len(), 1);
        assert_eq!(reply.products[0].name, "Ethereal Flow Maxi Dress");
    }

    #[tokio::test]
    async fn test_complements_load_once() {
        let service = Arc::new(ScriptedService::default());
        let catalog = seed::catalog();
        let session = StylistSession::open(Arc::clone(&service), Some(&catalog[0]));

        let first = session.load_complements(&catalog[0], &catalog).await;
        let second = session.load_complements(&catalog[0], &catalog).await;
        assert_eq!(first, second);
        assert_eq!(first.products[0].id.as_str(), "3");
        assert_eq!(service.complement_calls.load(Ordering::SeqCst), 1);
        assert!(session.complements().is_some());
    }

    #[tokio::test]
    async fn test_complements_fallback() {
        let service = Arc::new(ScriptedService {
            fail: true,
            ..Default::default()
        });
        let catalog = seed::catalog();
        let session = StylistSession::open(service, Some(&catalog[0]));
        let comps = session.load_complements(&catalog[0], &catalog).await;
        assert_eq!(comps.reasoning, "Explore our curated pairings below.");
        assert!(comps.products.is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_requests_both_land() {
        let session = StylistSession::open(Arc::new(ScriptedService::default()), None);
        let catalog = seed::catalog();
        let photo = image();
        let (a, b) = tokio::join!(
            session.send("First", &catalog),
            session.visual_search(&photo, &catalog)
        );
        assert!(a.is_some());
        assert_eq!(b.products.len(), 1);
        assert_eq!(session.transcript().len(), 5);
        assert_eq!(session.state(), SessionState::Idle);
    }
}
