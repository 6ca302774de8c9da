use crate::error::ImagebookError;

/// Hash `plain` with bcrypt on the blocking pool. Every call draws a fresh salt.
pub async fn hash_password(plain: String, cost: u32) -> Result<String, ImagebookError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost)).await??;
    Ok(hashed)
}

/// Check `plain` against a stored hash. No route logs users in yet; the test
/// suites use this to confirm what `POST /user/add` stored.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}
