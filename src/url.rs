use std::borrow::Cow;

use ::url::Url;

use crate::http::HttpUri;

#[derive(thiserror::Error, Debug)]
pub enum IntoUrlError {
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
    #[error("UriNotAbsoluteError {{ uri = {uri} }}")]
    UriNotAbsoluteError { uri: Cow<'static, str> },
}

impl HttpUri {
    /// Parse the assembled URI into a [`Url`]. Only absolute URIs (those
    /// with a scheme) can become a `Url`.
    pub fn to_url(&self) -> Result<Url, IntoUrlError> {
        if !self.is_absolute() {
            return Err(IntoUrlError::UriNotAbsoluteError {
                uri: Cow::Owned(self.to_string()),
            });
        }
        let url = Url::parse(&self.to_string())?;
        Ok(url)
    }
}
