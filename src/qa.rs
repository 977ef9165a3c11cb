//! Question answering over the document text
//!
//! The model sits behind [`QuestionAnswerer`] so the pattern strategy can be
//! driven by the HTTP inference client in production and by deterministic
//! stubs in tests.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Minimum confidence (exclusive) for an answer to be accepted
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Substituted for answers at or below [`CONFIDENCE_THRESHOLD`]
pub const UNPROCESSED_PLACEHOLDER: &str = "No se pudo procesar";

/// Default hosted model
pub const DEFAULT_QA_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/distilbert-base-cased-distilled-squad";

/// Answer returned by a question-answering model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Answer {
    #[serde(rename = "answer")]
    pub text: String,
    /// Confidence in [0, 1]
    pub score: f64,
}

impl Answer {
    /// The answer text when confident enough, otherwise the placeholder
    pub fn accepted_text(&self) -> String {
        if self.score > CONFIDENCE_THRESHOLD {
            self.text.clone()
        } else {
            UNPROCESSED_PLACEHOLDER.to_string()
        }
    }
}

/// Extractive question answering: find the answer to `question` in `context`
pub trait QuestionAnswerer {
    fn answer(&self, question: &str, context: &str) -> Result<Answer>;
}

// ============================================================================
// HTTP inference client
// ============================================================================

#[derive(Serialize)]
struct QaRequest<'a> {
    inputs: QaInputs<'a>,
}

#[derive(Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

/// Endpoints return either a single answer or a ranked list of candidates
#[derive(Deserialize)]
#[serde(untagged)]
enum QaResponse {
    Single(Answer),
    Ranked(Vec<Answer>),
}

impl QaResponse {
    fn into_best(self) -> Result<Answer> {
        match self {
            QaResponse::Single(answer) => Ok(answer),
            QaResponse::Ranked(answers) => {
                answers
                    .into_iter()
                    .next()
                    .ok_or_else(|| Error::QuestionAnswering {
                        reason: "endpoint returned no candidates".to_string(),
                    })
            }
        }
    }
}

/// Client for a Hugging Face style question-answering endpoint
pub struct HttpQuestionAnswerer {
    client: reqwest::blocking::Client,
    endpoint: url::Url,
    api_token: Option<String>,
}

impl HttpQuestionAnswerer {
    /// Create a client for `endpoint`, optionally authenticated with a bearer token
    pub fn new(endpoint: &str, api_token: Option<String>) -> Result<Self> {
        let endpoint = url::Url::parse(endpoint).map_err(|e| Error::QuestionAnswering {
            reason: format!("Invalid endpoint URL {}: {}", endpoint, e),
        })?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("resume-extractor/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_token,
        })
    }

    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }
}

impl QuestionAnswerer for HttpQuestionAnswerer {
    fn answer(&self, question: &str, context: &str) -> Result<Answer> {
        let body = QaRequest {
            inputs: QaInputs { question, context },
        };

        let mut request = self.client.post(self.endpoint.clone()).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?.error_for_status()?;
        let answer = response.json::<QaResponse>()?.into_best()?;

        tracing::debug!(question, score = answer.score, "question answered");
        Ok(answer)
    }
}

// ============================================================================
// Gated section queries
// ============================================================================

/// Where an accepted answer goes in the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTarget {
    ProfessionalProfile,
    Experience,
    Education,
    References,
}

/// A question asked only when its section heading is present
#[derive(Debug, Clone, Copy)]
pub struct SectionQuery {
    pub target: QueryTarget,
    /// Case-sensitive heading that must appear somewhere in the text
    pub heading: &'static str,
    pub question: &'static str,
}

/// Queries of the pattern strategy, in the order they are asked
pub const SECTION_QUERIES: [SectionQuery; 4] = [
    SectionQuery {
        target: QueryTarget::ProfessionalProfile,
        heading: "PERFIL PROFESIONAL",
        question: "¿Cuál es el perfil profesional del candidato?",
    },
    SectionQuery {
        target: QueryTarget::Experience,
        heading: "EXPERIENCIA PROFESIONAL",
        question: "¿Cuál es la experiencia profesional del candidato?",
    },
    SectionQuery {
        target: QueryTarget::Education,
        heading: "FORMACIÓN",
        question: "¿Cuál es la formación académica del candidato?",
    },
    SectionQuery {
        target: QueryTarget::References,
        heading: "REFERENCIAS",
        question: "¿Cuáles son las referencias del candidato?",
    },
];

impl SectionQuery {
    /// Ask the question if the heading is present.
    ///
    /// Returns `None` when the heading is absent or the answerer fails; the
    /// failure is logged and the caller leaves the field at its default.
    pub fn ask<Q: QuestionAnswerer + ?Sized>(&self, answerer: &Q, text: &str) -> Option<String> {
        if !text.contains(self.heading) {
            return None;
        }

        match answerer.answer(self.question, text) {
            Ok(answer) => {
                if answer.score <= CONFIDENCE_THRESHOLD {
                    tracing::debug!(
                        heading = self.heading,
                        score = answer.score,
                        "low-confidence answer replaced by placeholder"
                    );
                }
                Some(answer.accepted_text())
            }
            Err(e) => {
                tracing::warn!(heading = self.heading, error = %e, "question answering failed");
                None
            }
        }
    }
}
