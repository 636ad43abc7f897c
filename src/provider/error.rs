use thiserror::Error;

/// Result alias used by every provider call.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failures raised while talking to a search or directions backend.
#[derive(Debug, Error)]
pub enum ProviderError {
	/// The HTTP request could not be sent or its body could not be read.
	#[error("request to {endpoint} failed: {source}")]
	Request {
		endpoint: &'static str,
		#[source]
		source: reqwest::Error,
	},

	/// The backend answered with a non-success status code.
	#[error("{endpoint} responded with HTTP {status}")]
	Status { endpoint: &'static str, status: u16 },

	/// The response body was not the JSON shape we expect.
	#[error("failed to decode {endpoint} response: {source}")]
	Decode {
		endpoint: &'static str,
		#[source]
		source: serde_json::Error,
	},

	/// The search endpoint answered without any location collection.
	#[error("No Locations Found.")]
	NoLocations,
}

impl ProviderError {
	pub(crate) fn request(endpoint: &'static str, source: reqwest::Error) -> Self {
		Self::Request { endpoint, source }
	}

	pub(crate) fn decode(endpoint: &'static str, source: serde_json::Error) -> Self {
		Self::Decode { endpoint, source }
	}
}
