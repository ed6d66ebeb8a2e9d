//! Conversions from external infrastructure errors into the API error.

use std::error::Error as StdError;

use nfsnapi_domain::ApiError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and
/// unwraps into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ApiError);

impl From<InfraError> for ApiError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoApiError {
    fn into_api_error(self) -> ApiError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ApiError */
/* -------------------------------------------------------------------------- */

impl IntoApiError for HttpError {
    fn into_api_error(self) -> ApiError {
        // Name resolution and connect failures report the underlying cause.
        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ApiError::new(root_cause(&self));
        }

        // Everything else that failed without an HTTP response: resets,
        // malformed responses, body read errors, timeouts.
        ApiError::new(describe_chain(&self))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_api_error())
    }
}

fn root_cause(err: &(dyn StdError + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

fn describe_chain(err: &(dyn StdError + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::io::Write;
    use std::net::TcpListener;

    use reqwest::Client;

    use super::*;

    #[derive(Debug)]
    struct Layer {
        message: &'static str,
        source: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source.as_deref().map(|s| s as &(dyn StdError + 'static))
        }
    }

    fn layered() -> Layer {
        Layer {
            message: "error sending request",
            source: Some(Box::new(Layer {
                message: "client error (Connect)",
                source: Some(Box::new(Layer { message: "Connection refused", source: None })),
            })),
        }
    }

    #[test]
    fn root_cause_walks_to_innermost_error() {
        assert_eq!(root_cause(&layered()), "Connection refused");
    }

    #[test]
    fn chain_description_includes_every_layer() {
        assert_eq!(
            describe_chain(&layered()),
            "error sending request: client error (Connect): Connection refused"
        );
    }

    #[tokio::test]
    async fn refused_connection_maps_to_root_cause() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();
        assert!(error.is_connect());

        let mapped: ApiError = InfraError::from(error).into();
        assert!(!mapped.reason().starts_with("error sending request"), "{}", mapped.reason());
        assert!(mapped.reason().contains("Connection refused"), "{}", mapped.reason());
        assert!(mapped.debug().is_none());
    }

    #[tokio::test]
    async fn garbage_response_maps_to_transport_description() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let _ = stream.write_all(b"this is not HTTP\r\n\r\n");
            }
        });

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();
        server.join().unwrap();

        let mapped: ApiError = InfraError::from(error).into();
        assert!(mapped.reason().contains("error sending request"));
        assert!(mapped.debug().is_none());
    }
}
