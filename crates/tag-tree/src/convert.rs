use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::ConvertError;
use crate::options::ConverterOptions;
use crate::tag::Tag;
use crate::view::{AttributeView, ToView, Value};

/// Encoder and decoder sharing one set of options.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConverterOptions,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    pub fn encode(&self, value: &Value) -> Result<Tag, ConvertError> {
        Encoder::new(&self.options).encode(value)
    }

    pub fn encode_view(&self, view: &AttributeView) -> Result<Tag, ConvertError> {
        Encoder::new(&self.options).encode_view(view)
    }

    pub fn encode_object(&self, object: &dyn ToView) -> Result<Tag, ConvertError> {
        Encoder::new(&self.options).encode_object(object)
    }

    pub fn decode(&self, tag: &Tag) -> Result<Value, ConvertError> {
        Decoder::new(&self.options).decode(tag)
    }

    pub fn decode_view(&self, tag: &Tag) -> Result<AttributeView, ConvertError> {
        Decoder::new(&self.options).decode_view(tag)
    }

    pub fn decode_into(&self, tag: &Tag, target: &mut AttributeView) -> Result<(), ConvertError> {
        Decoder::new(&self.options).decode_into(tag, target)
    }
}

/// Encodes with default options.
pub fn encode(value: &Value) -> Result<Tag, ConvertError> {
    Converter::default().encode(value)
}

/// Decodes with default options.
pub fn decode(tag: &Tag) -> Result<Value, ConvertError> {
    Converter::default().decode(tag)
}

pub fn encode_view(view: &AttributeView) -> Result<Tag, ConvertError> {
    Converter::default().encode_view(view)
}

pub fn decode_view(tag: &Tag) -> Result<AttributeView, ConvertError> {
    Converter::default().decode_view(tag)
}
