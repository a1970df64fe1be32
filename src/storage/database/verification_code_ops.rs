use crate::core::models::{User, UserScope};
use crate::utils::codes::generate_code;
use crate::utils::error::{BackendError, Result};
use sea_orm::*;
use tracing::{debug, warn};
use uuid::Uuid;

use super::Database;
use super::entities::{self, verification_code};
use super::user_ops::{UpdateUser, UserParams};

impl Database {
    /// Mint a verification code for an email address
    ///
    /// Any previously issued codes for the address are invalidated.
    pub async fn create_verification_code(
        &self,
        email: &str,
        lifetime_secs: u64,
    ) -> Result<String> {
        debug!("Creating verification code for {}", email);

        entities::VerificationCode::delete_many()
            .filter(verification_code::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        let code = generate_code(6);
        let now = chrono::Utc::now();
        let active_model = verification_code::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            code: Set(code.clone()),
            expiration: Set((now + chrono::Duration::seconds(lifetime_secs as i64)).into()),
            created_at: Set(now.into()),
        };

        entities::VerificationCode::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        Ok(code)
    }

    /// Redeem a verification code, promoting the account out of Unverified
    ///
    /// The code is consumed either way once found; an expired or unknown
    /// code is an authentication failure, not a server fault.
    pub async fn redeem_verification_code(&self, email: &str, code: &str) -> Result<User> {
        let row = entities::VerificationCode::find()
            .filter(verification_code::Column::Email.eq(email))
            .filter(verification_code::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(BackendError::Database)?
            .ok_or_else(|| BackendError::auth("Invalid verification code"))?;

        let expired = row.expiration.naive_utc().and_utc() < chrono::Utc::now();

        entities::VerificationCode::delete_by_id(row.id)
            .exec(&self.db)
            .await
            .map_err(BackendError::Database)?;

        if expired {
            warn!("Expired verification code redeemed for {}", email);
            return Err(BackendError::auth("Verification code expired"));
        }

        let user = self
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| BackendError::not_found("User not found"))?;

        if user.role == UserScope::Unverified {
            let updated = self
                .edit_users(
                    UpdateUser {
                        role: Some(UserScope::User),
                        ..UpdateUser::default()
                    },
                    UserParams {
                        id: Some(user.id),
                        ..UserParams::default()
                    },
                )
                .await?;
            if let Some(user) = updated.into_iter().next() {
                return Ok(user);
            }
        }

        Ok(user)
    }
}
