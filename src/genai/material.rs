//! Material Workflows
//!
//! AI image enhancement for an existing material and generation of a new
//! material from a name, category and visual description.

use serde_json::{json, Map, Value};

use super::{GenAiError, GenerativeService};
use crate::models::Material;

/// Image used when the image model returns no inline data
pub const IMAGE_FALLBACK_URL: &str = "https://picsum.photos/400/300";

const STYLE: &str = "Style: Luxury construction material sample, even lighting, sharp details, top-down view.";

/// User input from the generate form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialRequest {
    pub name: String,
    pub category: String,
    pub description: String,
}

impl MaterialRequest {
    /// Name and description are required
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }
}

pub fn enhance_prompt(material: &Material) -> String {
    format!(
        "Close-up, high-fidelity, photorealistic architectural texture photography of {} ({}).\n\
         Origin: {}.\n\
         {}\n\
         The image should show the intricate details, veining, and texture of the material.",
        material.name, material.category, material.origin, STYLE
    )
}

pub fn image_prompt(request: &MaterialRequest) -> String {
    format!(
        "Close-up, high-fidelity, photorealistic architectural texture photography of {} ({}). {}. {}",
        request.name.trim(),
        request.category,
        request.description.trim(),
        STYLE
    )
}

pub fn metadata_prompt(request: &MaterialRequest) -> String {
    format!(
        "Generate a JSON object for a luxury construction material.\n\
         Name: {}\n\
         Type: {}\n\
         Description: {}\n\
         Fields required:\n\
         - origin: string (City, Country)\n\
         - pricePerSqFt: number (integer between 100 and 600)\n\
         - leadTimeWeeks: number (integer between 4 and 24)\n\
         - supplier: string (Sophisticated company name)\n\
         - matchScore: number (integer between 85 and 99)\n\
         Return strictly valid JSON.",
        request.name.trim(),
        request.category,
        request.description.trim()
    )
}

/// Response schema for the metadata request
pub fn metadata_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "origin": { "type": "STRING" },
            "pricePerSqFt": { "type": "NUMBER" },
            "leadTimeWeeks": { "type": "NUMBER" },
            "supplier": { "type": "STRING" },
            "matchScore": { "type": "NUMBER" }
        }
    })
}

/// Id for a freshly generated material
pub fn generated_id() -> String {
    format!("gen-{}", chrono::Utc::now().timestamp_millis())
}

/// Metadata fields as returned by the model. Absent or mistyped fields are
/// `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialMetadata {
    pub origin: Option<String>,
    pub price_per_sq_ft: Option<f64>,
    pub lead_time_weeks: Option<f64>,
    pub supplier: Option<String>,
    pub match_score: Option<f64>,
}

/// Ceiling on a generated price per sq ft, in dollars
pub const MAX_GENERATED_PRICE: f64 = 10_000.0;

impl MaterialMetadata {
    /// Record used when the model's text is missing or not JSON
    pub fn unparsed() -> Self {
        Self {
            origin: Some("Unknown".to_string()),
            price_per_sq_ft: Some(0.0),
            lead_time_weeks: Some(0.0),
            supplier: Some("Unknown".to_string()),
            match_score: Some(90.0),
        }
    }

    pub fn parse(text: Option<&str>) -> Self {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return Self::unparsed();
        };
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(fields)) => Self::from_fields(&fields),
            Ok(_) => Self::default(),
            Err(e) => {
                log::warn!("Failed to parse material metadata JSON: {}", e);
                Self::unparsed()
            }
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_string);
        let number = |key: &str| fields.get(key).and_then(Value::as_f64);
        Self {
            origin: text("origin"),
            price_per_sq_ft: number("pricePerSqFt"),
            lead_time_weeks: number("leadTimeWeeks"),
            supplier: text("supplier"),
            match_score: number("matchScore"),
        }
    }

    /// Build the catalog record. Empty strings and non-positive numbers take
    /// the per-field fallback.
    pub fn into_material(self, id: String, request: &MaterialRequest, image_url: String) -> Material {
        let text = |v: Option<String>, fallback: &str| {
            v.filter(|s| !s.trim().is_empty()).unwrap_or_else(|| fallback.to_string())
        };
        let positive = |v: Option<f64>| v.filter(|n| n.is_finite() && *n > 0.0);

        Material {
            id,
            name: request.name.trim().to_string(),
            category: request.category.clone(),
            origin: text(self.origin, "Custom Origin"),
            match_score: positive(self.match_score).map_or(88, |n| n.round().min(100.0) as u8),
            price_per_sq_ft: positive(self.price_per_sq_ft).map_or(200.0, |n| n.min(MAX_GENERATED_PRICE)),
            currency: "USD".to_string(),
            lead_time_weeks: positive(self.lead_time_weeks).map_or(8, |n| n.round().max(1.0) as u32),
            verified: false,
            provenance_id: "Pending Verification".to_string(),
            image_url,
            supplier: text(self.supplier, "Custom Supplier"),
        }
    }
}

/// Request both the texture image and the metadata, concurrently. Any error
/// fails the whole operation so no partial material is produced.
pub async fn generate_material<S>(service: &S, request: &MaterialRequest, id: String) -> Result<Material, GenAiError>
where
    S: GenerativeService + ?Sized,
{
    let schema = metadata_schema();
    let image_prompt = image_prompt(request);
    let metadata_prompt = metadata_prompt(request);

    let (image, metadata) = futures::try_join!(
        service.generate_image(&image_prompt),
        service.generate_json(&metadata_prompt, &schema),
    )?;

    let image_url = match image {
        Some(image) => image.data_url(),
        None => {
            log::warn!("Image model returned no inline data for {}, using placeholder", request.name);
            IMAGE_FALLBACK_URL.to_string()
        }
    };
    let metadata = MaterialMetadata::parse(metadata.as_deref());
    Ok(metadata.into_material(id, request, image_url))
}

/// New image for `material` as a data URL, or `None` if the model returned
/// no image
pub async fn enhance_image<S>(service: &S, material: &Material) -> Result<Option<String>, GenAiError>
where
    S: GenerativeService + ?Sized,
{
    let image = service.generate_image(&enhance_prompt(material)).await?;
    Ok(image.map(|i| i.data_url()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use super::*;
    use crate::catalog;
    use crate::genai::InlineImage;
    use crate::mock_data;
    use crate::pricing::{Money, PaymentMethod};

    /// Canned reply for one endpoint
    #[derive(Clone)]
    enum Reply<T> {
        Ok(T),
        Fail(u16),
    }

    struct ScriptedService {
        image: Reply<Option<InlineImage>>,
        json: Reply<Option<String>>,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedService {
        fn new(image: Reply<Option<InlineImage>>, json: Reply<Option<String>>) -> Self {
            Self {
                image,
                json,
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    fn answer<T: Clone>(reply: &Reply<T>) -> Result<T, GenAiError> {
        match reply {
            Reply::Ok(v) => Ok(v.clone()),
            Reply::Fail(status) => Err(GenAiError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
        }
    }

    #[async_trait(?Send)]
    impl GenerativeService for ScriptedService {
        async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>, GenAiError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            answer(&self.image)
        }

        async fn generate_json(&self, prompt: &str, _schema: &Value) -> Result<Option<String>, GenAiError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            answer(&self.json)
        }
    }

    fn png() -> Option<InlineImage> {
        Some(InlineImage {
            mime_type: "image/png".to_string(),
            data: "QUJD".to_string(),
        })
    }

    fn noir() -> MaterialRequest {
        MaterialRequest {
            name: "Noir Saint Laurent Marble".to_string(),
            category: "Natural Stone".to_string(),
            description: "Deep black with golden veins, polished".to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_material_uses_metadata() {
        let service = ScriptedService::new(
            Reply::Ok(png()),
            Reply::Ok(Some(
                r#"{"origin":"Namur, Belgium","pricePerSqFt":480,"leadTimeWeeks":10,"supplier":"Maison Noire","matchScore":93}"#
                    .to_string(),
            )),
        );

        let material = generate_material(&service, &noir(), "gen-1".to_string()).await.unwrap();

        assert_eq!(material.id, "gen-1");
        assert_eq!(material.name, "Noir Saint Laurent Marble");
        assert_eq!(material.category, "Natural Stone");
        assert_eq!(material.origin, "Namur, Belgium");
        assert_eq!(material.price_per_sq_ft, 480.0);
        assert_eq!(material.lead_time_weeks, 10);
        assert_eq!(material.supplier, "Maison Noire");
        assert_eq!(material.match_score, 93);
        assert_eq!(material.image_url, "data:image/png;base64,QUJD");
        assert_eq!(material.currency, "USD");
        assert!(!material.verified);
        assert_eq!(material.provenance_id, "Pending Verification");
        assert_eq!(service.prompts.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_fields_take_defaults() {
        let service = ScriptedService::new(Reply::Ok(png()), Reply::Ok(Some(r#"{"origin":""}"#.to_string())));

        let material = generate_material(&service, &noir(), "gen-2".to_string()).await.unwrap();

        assert_eq!(material.match_score, 88);
        assert_eq!(material.price_per_sq_ft, 200.0);
        assert_eq!(material.lead_time_weeks, 8);
        assert_eq!(material.origin, "Custom Origin");
        assert_eq!(material.supplier, "Custom Supplier");
    }

    #[tokio::test]
    async fn test_malformed_metadata_uses_unparsed_record() {
        let service = ScriptedService::new(Reply::Ok(png()), Reply::Ok(Some("origin: Oslo".to_string())));

        let material = generate_material(&service, &noir(), "gen-3".to_string()).await.unwrap();

        assert_eq!(material.origin, "Unknown");
        assert_eq!(material.supplier, "Unknown");
        assert_eq!(material.match_score, 90);
        // Zero price and lead time fall through to the field defaults
        assert_eq!(material.price_per_sq_ft, 200.0);
        assert_eq!(material.lead_time_weeks, 8);
    }

    #[tokio::test]
    async fn test_oversized_price_is_capped_and_quotable() {
        let service = ScriptedService::new(Reply::Ok(png()), Reply::Ok(Some(r#"{"pricePerSqFt": 1e17}"#.to_string())));

        let material = generate_material(&service, &noir(), "gen-5".to_string()).await.unwrap();
        assert_eq!(material.price_per_sq_ft, MAX_GENERATED_PRICE);

        let terms = crate::config::OrderConfig::default().terms();
        let quote = terms.quote(Money::from_major(material.price_per_sq_ft), PaymentMethod::Escrow);
        assert_eq!(quote.subtotal, Money::from_major(10_000.0 * 120.0 + 2450.0));
    }

    #[tokio::test]
    async fn test_missing_image_uses_placeholder() {
        let service = ScriptedService::new(Reply::Ok(None), Reply::Ok(None));
        let material = generate_material(&service, &noir(), "gen-4".to_string()).await.unwrap();
        assert_eq!(material.image_url, IMAGE_FALLBACK_URL);
        assert_eq!(material.match_score, 90);
    }

    #[tokio::test]
    async fn test_any_failure_leaves_list_unchanged() {
        let original = mock_data::materials();
        let scripts = [
            (Reply::Fail(500), Reply::Ok(Some("{}".to_string()))),
            (Reply::Ok(png()), Reply::Fail(503)),
            (Reply::Fail(429), Reply::Fail(429)),
        ];

        for (image, json) in scripts {
            let service = ScriptedService::new(image, json);
            let mut materials = original.clone();
            match generate_material(&service, &noir(), generated_id()).await {
                Ok(material) => catalog::prepend(&mut materials, material),
                Err(e) => assert!(matches!(e, GenAiError::Api { .. })),
            }
            assert_eq!(materials, original);
        }
    }

    #[tokio::test]
    async fn test_enhance_image() {
        let calacatta = mock_data::materials().remove(0);

        let service = ScriptedService::new(Reply::Ok(png()), Reply::Fail(500));
        let url = enhance_image(&service, &calacatta).await.unwrap();
        assert_eq!(url.as_deref(), Some("data:image/png;base64,QUJD"));
        let prompt = service.prompts.borrow()[0].clone();
        assert!(prompt.contains("Calacatta Oro Marble (Natural Stone)"));
        assert!(prompt.contains("Origin: Carrara, Italy."));

        let failing = ScriptedService::new(Reply::Fail(500), Reply::Fail(500));
        let mut materials = mock_data::materials();
        if let Ok(Some(url)) = enhance_image(&failing, &calacatta).await {
            catalog::replace_image(&mut materials, &calacatta.id, url);
        }
        assert_eq!(materials, mock_data::materials());
    }

    #[test]
    fn test_match_score_is_clamped() {
        let metadata = MaterialMetadata::parse(Some(r#"{"matchScore": 150.4, "leadTimeWeeks": 0.2}"#));
        let material = metadata.into_material("x".to_string(), &noir(), String::new());
        assert_eq!(material.match_score, 100);
        assert_eq!(material.lead_time_weeks, 1);
    }

    #[test]
    fn test_mistyped_fields_are_absent() {
        let metadata = MaterialMetadata::parse(Some(r#"{"pricePerSqFt": "250", "supplier": 7}"#));
        assert_eq!(metadata.price_per_sq_ft, None);
        assert_eq!(metadata.supplier, None);
    }

    #[test]
    fn test_non_object_json_has_no_fields() {
        assert_eq!(MaterialMetadata::parse(Some("[1, 2]")), MaterialMetadata::default());
    }

    #[test]
    fn test_request_completeness() {
        assert!(noir().is_complete());
        let blank = MaterialRequest {
            description: "   ".to_string(),
            ..noir()
        };
        assert!(!blank.is_complete());
    }

    #[test]
    fn test_prompts_mention_inputs() {
        let request = noir();
        assert!(image_prompt(&request).contains("Deep black with golden veins"));
        let prompt = metadata_prompt(&request);
        assert!(prompt.contains("Name: Noir Saint Laurent Marble"));
        assert!(prompt.contains("matchScore"));
    }

    #[test]
    fn test_schema_fields() {
        let schema = metadata_schema();
        let properties = schema["properties"].as_object().unwrap();
        for key in ["origin", "pricePerSqFt", "leadTimeWeeks", "supplier", "matchScore"] {
            assert!(properties.contains_key(key), "missing {}", key);
        }
    }

    #[test]
    fn test_generated_id_prefix() {
        assert!(generated_id().starts_with("gen-"));
    }
}
