use http::Method;
use std::fmt::{Display, Formatter};

/// The eight operation slots of a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl OperationMethod {
    /// All slots in the order they are written to JSON.
    pub const ALL: [OperationMethod; 8] = [
        OperationMethod::Get,
        OperationMethod::Put,
        OperationMethod::Post,
        OperationMethod::Delete,
        OperationMethod::Options,
        OperationMethod::Head,
        OperationMethod::Patch,
        OperationMethod::Trace,
    ];

    /// Field name of the slot inside a path item.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationMethod::Get => "get",
            OperationMethod::Put => "put",
            OperationMethod::Post => "post",
            OperationMethod::Delete => "delete",
            OperationMethod::Options => "options",
            OperationMethod::Head => "head",
            OperationMethod::Patch => "patch",
            OperationMethod::Trace => "trace",
        }
    }
}

impl Display for OperationMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&Method> for OperationMethod {
    type Error = Method;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        match method {
            &Method::GET => Ok(OperationMethod::Get),
            &Method::PUT => Ok(OperationMethod::Put),
            &Method::POST => Ok(OperationMethod::Post),
            &Method::DELETE => Ok(OperationMethod::Delete),
            &Method::OPTIONS => Ok(OperationMethod::Options),
            &Method::HEAD => Ok(OperationMethod::Head),
            &Method::PATCH => Ok(OperationMethod::Patch),
            &Method::TRACE => Ok(OperationMethod::Trace),
            _ => Err(method.clone()),
        }
    }
}

impl From<OperationMethod> for Method {
    fn from(method: OperationMethod) -> Self {
        match method {
            OperationMethod::Get => Method::GET,
            OperationMethod::Put => Method::PUT,
            OperationMethod::Post => Method::POST,
            OperationMethod::Delete => Method::DELETE,
            OperationMethod::Options => Method::OPTIONS,
            OperationMethod::Head => Method::HEAD,
            OperationMethod::Patch => Method::PATCH,
            OperationMethod::Trace => Method::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::method::OperationMethod;
    use http::Method;

    #[test]
    fn test_round_trip_through_http_method() {
        for method in OperationMethod::ALL {
            let http_method = Method::from(method);
            assert_eq!(OperationMethod::try_from(&http_method), Ok(method));
            assert_eq!(http_method.as_str().to_lowercase(), method.as_str());
        }
    }

    #[test]
    fn test_connect_has_no_slot() {
        assert_eq!(
            OperationMethod::try_from(&Method::CONNECT),
            Err(Method::CONNECT)
        );
    }
}
