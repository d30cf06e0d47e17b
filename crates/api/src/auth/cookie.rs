//! The `token` auth cookie.

/// Name of the cookie holding the admin token.
pub const TOKEN_COOKIE: &str = "token";

/// `Set-Cookie` value that stores `token` for `max_age_secs`.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    build(token, max_age_secs, secure)
}

/// `Set-Cookie` value that makes the browser drop the token immediately.
pub fn cleared_cookie(secure: bool) -> String {
    build("", 0, secure)
}

fn build(value: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{TOKEN_COOKIE}={value}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Value of the cookie named `name` in a `Cookie` request header.
///
/// Pairs are `;`-separated and the name must match exactly, so `xtoken=`
/// or `token_old=` never match `token`.
pub fn find_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}
