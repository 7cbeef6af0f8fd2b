use std::fmt;
use std::io;

/// Error type for the TMX map loader.
#[derive(Debug)]
pub enum Error {
    /// The map text is not well-formed XML
    Xml(roxmltree::Error),
    /// A required element is missing ("map", "data", ...)
    MissingElement(&'static str),
    /// A required attribute is missing from an element
    MissingAttribute {
        /// Tag name of the element the attribute was expected on
        element: String,
        /// Name of the missing attribute
        attribute: String,
    },
    /// An attribute is present but not a base-10 integer (or is zero where a
    /// positive value is required)
    InvalidAttribute {
        /// Tag name of the element carrying the attribute
        element: String,
        /// Name of the offending attribute
        attribute: String,
        /// The raw attribute value as found in the document
        value: String,
    },
    /// A layer's tile count does not match map width * height
    InvalidLayerSize(String),
    /// File I/O error
    Io(io::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Xml(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Xml(e) => write!(f, "XML parse error: {}", e),
            Error::MissingElement(name) => write!(f, "Missing required element <{}>", name),
            Error::MissingAttribute { element, attribute } => {
                write!(f, "Missing attribute '{}' on <{}>", attribute, element)
            }
            Error::InvalidAttribute {
                element,
                attribute,
                value,
            } => write!(
                f,
                "Invalid value '{}' for attribute '{}' on <{}>",
                value, attribute, element
            ),
            Error::InvalidLayerSize(name) => write!(
                f,
                "Invalid layer size for layer '{}': tile count does not match map dimensions",
                name
            ),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
