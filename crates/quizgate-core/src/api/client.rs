//! Typed quiz API built on top of the gateway.
//!
//! `QuizClient` is the only place that reacts to auth rejections: on 401
//! it clears the session and sends the user to the login screen,
//! remembering where they were.

use std::sync::Arc;

use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::auth::SessionManager;
use crate::models::{Participation, ParticipationResponse, Question, QuestionId, QuizInfo};
use crate::navigation::{Destination, Navigator};

use super::{ApiError, ApiGateway};

/// Whether a request carries the session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Session,
}

#[derive(Clone)]
pub struct QuizClient {
    gateway: ApiGateway,
    session: SessionManager,
    navigator: Arc<dyn Navigator>,
}

impl QuizClient {
    pub fn new(gateway: ApiGateway, session: SessionManager, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            gateway,
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    /// Send through the gateway, handling auth rejections globally.
    ///
    /// On 401 the session is already cleared and the redirect issued by the
    /// time `Err(ApiError::Unauthorized)` comes back.
    pub async fn send(
        &self,
        method: Method,
        resource: &str,
        body: Option<&JsonValue>,
        access: Access,
    ) -> Result<Response, ApiError> {
        let token = match access {
            Access::Public => None,
            Access::Session => self.session.current_token(),
        };

        let result = self
            .gateway
            .call(method, resource, body, token.as_deref())
            .await;

        if let Err(ApiError::Unauthorized) = result {
            self.handle_auth_rejection();
        }
        result
    }

    fn handle_auth_rejection(&self) {
        let return_to = self.navigator.current_location();
        warn!(return_to = %return_to, "Backend rejected credentials, returning to login");
        self.session.logout();
        self.navigator
            .navigate(Destination::login_returning_to(return_to));
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str, access: Access) -> Result<T, ApiError> {
        let response = self.send(Method::GET, resource, None, access).await?;
        Self::decode(response, resource).await
    }

    async fn decode<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse {} response: {}", resource, e)))
    }

    fn to_body<B: Serialize>(body: &B) -> Result<JsonValue, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }

    // ===== Quiz taking (public) =====

    pub async fn get_quiz_info(&self) -> Result<QuizInfo, ApiError> {
        self.fetch("quiz-info", Access::Public).await
    }

    /// Question at a 0-indexed position in the quiz
    pub async fn get_question(&self, position: u32) -> Result<Question, ApiError> {
        self.fetch(&format!("questions?position={}", position), Access::Public)
            .await
    }

    pub async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        self.fetch("questions", Access::Public).await
    }

    /// Submit a complete run and get it scored
    pub async fn participate(
        &self,
        player_name: &str,
        answers: &[u32],
    ) -> Result<ParticipationResponse, ApiError> {
        let body = Self::to_body(&Participation {
            player_name: player_name.to_string(),
            answers: answers.to_vec(),
        })?;
        let response = self
            .send(Method::POST, "participations", Some(&body), Access::Public)
            .await?;
        Self::decode(response, "participations").await
    }

    // ===== Session =====

    pub async fn login(&self, password: &str) -> bool {
        self.session.login(&self.gateway, password).await
    }

    pub fn logout(&self) {
        info!("Logging out");
        self.session.logout();
    }

    // ===== Question management (session) =====

    pub async fn get_question_by_id(&self, id: &str) -> Result<Question, ApiError> {
        self.fetch(&format!("questions/{}", id), Access::Session).await
    }

    pub async fn create_question(&self, question: &Question) -> Result<QuestionId, ApiError> {
        let body = Self::to_body(question)?;
        let response = self
            .send(Method::POST, "questions", Some(&body), Access::Session)
            .await?;
        Self::decode(response, "questions").await
    }

    pub async fn update_question(&self, id: &str, question: &Question) -> Result<(), ApiError> {
        let body = Self::to_body(question)?;
        self.send(Method::PUT, &format!("questions/{}", id), Some(&body), Access::Session)
            .await?;
        Ok(())
    }

    pub async fn delete_question(&self, id: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, &format!("questions/{}", id), None, Access::Session)
            .await?;
        Ok(())
    }

    pub async fn delete_all_questions(&self) -> Result<(), ApiError> {
        self.send(Method::DELETE, "questions/all", None, Access::Session)
            .await?;
        Ok(())
    }

    pub async fn delete_all_participations(&self) -> Result<(), ApiError> {
        self.send(Method::DELETE, "participations/all", None, Access::Session)
            .await?;
        Ok(())
    }

    /// Drop and recreate every backend table
    pub async fn rebuild_database(&self) -> Result<(), ApiError> {
        self.send(Method::POST, "rebuild-db", None, Access::Session)
            .await?;
        Ok(())
    }
}
