use crate::{ENCODED_SLASH, ENCODED_TILDE, PATH_SEPARATOR, TILDE};
use std::fmt::{Display, Formatter};

/// One step into a JSON document: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a node inside a JSON document.
///
/// Two renderings are available. [`Display`] gives the dotted form used in
/// error messages (`.paths./users.get.parameters[0].schema`), while
/// [`JsonPath::format_path`] gives a JSON pointer body with `~0`/`~1` escaping
/// (`paths/~1users/get/parameters/0/schema`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonPath(pub Vec<PathSegment>);

/// Escapes a single JSON pointer reference token.
pub(crate) fn escape_pointer_segment(segment: &str) -> String {
    if segment.contains(TILDE) || segment.contains(PATH_SEPARATOR) {
        segment
            .replace(TILDE, ENCODED_TILDE)
            .replace(PATH_SEPARATOR, ENCODED_SLASH)
    } else {
        segment.to_owned()
    }
}

impl JsonPath {
    pub fn new() -> Self {
        JsonPath(Vec::new())
    }

    pub fn add(&mut self, segment: impl AsRef<str>) -> &mut Self {
        self.0.push(PathSegment::Key(segment.as_ref().to_owned()));
        self
    }

    pub fn add_index(&mut self, index: usize) -> &mut Self {
        self.0.push(PathSegment::Index(index));
        self
    }

    /// Returns a copy of this path extended by an object key.
    pub fn key(&self, segment: impl AsRef<str>) -> JsonPath {
        let mut path = self.clone();
        path.add(segment);
        path
    }

    /// Returns a copy of this path extended by an array index.
    pub fn index(&self, index: usize) -> JsonPath {
        let mut path = self.clone();
        path.add_index(index);
        path
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn format_path(&self) -> String {
        self.0
            .iter()
            .map(|segment| match segment {
                PathSegment::Key(key) => escape_pointer_segment(key),
                PathSegment::Index(index) => index.to_string(),
            })
            .collect::<Vec<String>>()
            .join(PATH_SEPARATOR)
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, ".");
        }
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::types::json_path::{JsonPath, PathSegment};
    use crate::{ENCODED_SLASH, ENCODED_TILDE, PATH_SEPARATOR};

    #[test]
    fn test_new_json_path() {
        let path = JsonPath::new();
        assert_eq!(path.0.len(), 0);
        assert!(path.is_root());
        assert_eq!(path.format_path(), "");
        assert_eq!(path.to_string(), ".");
    }

    #[test]
    fn test_add_multiple_segments() {
        let mut path = JsonPath::new();
        path.add("components").add("schemas").add("User");
        assert_eq!(path.0.len(), 3);
        assert_eq!(path.0[2], PathSegment::Key("User".to_string()));
        assert_eq!(path.format_path(), "components/schemas/User");
        assert_eq!(path.to_string(), ".components.schemas.User");
    }

    #[test]
    fn test_segment_with_tilde_and_slash_is_escaped_in_pointer_only() {
        let mut path = JsonPath::new();
        path.add("user~/profile");

        let expected = "user".to_string() + ENCODED_TILDE + ENCODED_SLASH + "profile";
        assert_eq!(path.format_path(), expected);
        assert_eq!(path.to_string(), ".user~/profile");
    }

    #[test]
    fn test_format_operation_parameter_path() {
        let path = JsonPath::new()
            .key("paths")
            .key("/users")
            .key("get")
            .key("parameters")
            .index(0)
            .key("schema");

        assert_eq!(path.to_string(), ".paths./users.get.parameters[0].schema");
        assert_eq!(
            path.format_path(),
            format!(
                "paths{0}{1}users{0}get{0}parameters{0}0{0}schema",
                PATH_SEPARATOR, ENCODED_SLASH
            )
        );
    }

    #[test]
    fn test_key_and_index_do_not_modify_original() {
        let base = JsonPath::new().key("items");
        let child = base.index(3);
        assert_eq!(base.0.len(), 1);
        assert_eq!(child.0.len(), 2);
        assert_eq!(child.to_string(), ".items[3]");
    }

    #[test]
    fn test_special_characters_encoding() {
        let mut path = JsonPath::new();
        path.add("a~b/c").add("~~/~~").add("//");

        let expected_path = [
            format!("a{}b{}c", ENCODED_TILDE, ENCODED_SLASH),
            format!("{0}{0}{1}{0}{0}", ENCODED_TILDE, ENCODED_SLASH),
            format!("{0}{0}", ENCODED_SLASH),
        ]
        .join(PATH_SEPARATOR);

        assert_eq!(path.format_path(), expected_path);
    }

    #[test]
    fn test_add_empty_segment() {
        let mut path = JsonPath::new();
        path.add("");
        assert_eq!(path.0.len(), 1);
        assert_eq!(path.format_path(), "");
        assert_eq!(path.to_string(), ".");
    }
}
