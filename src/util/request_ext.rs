use headers::HeaderMapExt;
use hyper::Request;

use crate::client_ip::PRIVATE_RANGES;
use crate::client_ip::X_FORWARDED_FOR;
use crate::client_ip::resolve_parts;
use crate::quality::Accept;

pub trait RequestExt {
  /// Public client address from `X-Forwarded-For` and the peer [`SocketAddr`] extension.
  ///
  /// Returns an empty string when neither yields an address.
  ///
  /// [`SocketAddr`]: std::net::SocketAddr
  fn client_ip(&self) -> String;

  /// Decoded `Accept` header, `Ok(None)` when the request has none.
  fn accept(&self) -> Result<Option<Accept>, headers::Error>;
}

impl<B> RequestExt for Request<B> {
  fn client_ip(&self) -> String {
    resolve_parts(self.headers(), self.extensions(), &X_FORWARDED_FOR, &PRIVATE_RANGES)
  }

  fn accept(&self) -> Result<Option<Accept>, headers::Error> {
    self.headers().typed_try_get::<Accept>()
  }
}
