//! On/off codec features, grouped by category.
//!
//! Responsibilities:
//! - Enumerate the toggles of each category with their default state.
//! - Look features up by constant name under relaxed matching.
//!
//! Invariants:
//! - Constant names are unique within a category but may repeat across
//!   categories (`WRAP_EXCEPTIONS` exists for reading and writing).
//! - A feature's default never changes at runtime; configured state lives in
//!   `CodecConfig`.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::constant_key;

macro_rules! features {
    (
        $(#[$meta:meta])*
        $name:ident => $wrapper:ident {
            $( $variant:ident => $constant:literal, $default:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub const fn constant_name(self) -> &'static str {
                match self {
                    $( $name::$variant => $constant, )+
                }
            }

            pub const fn enabled_by_default(self) -> bool {
                match self {
                    $( $name::$variant => $default, )+
                }
            }

            /// Find a feature by constant name, ignoring case and separators.
            pub fn from_constant_name(name: &str) -> Option<Self> {
                let wanted = constant_key(name);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|f| constant_key(f.constant_name()) == wanted)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.constant_name())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.constant_name())
            }
        }

        impl From<$name> for Feature {
            fn from(feature: $name) -> Self {
                Feature::$wrapper(feature)
            }
        }
    };
}

features! {
    /// Toggles affecting how values are written.
    SerializationFeature => Serialization {
        WrapRootValue => "WRAP_ROOT_VALUE", false;
        IndentOutput => "INDENT_OUTPUT", false;
        FailOnEmptyBeans => "FAIL_ON_EMPTY_BEANS", true;
        FailOnSelfReferences => "FAIL_ON_SELF_REFERENCES", true;
        WrapExceptions => "WRAP_EXCEPTIONS", true;
        CloseCloseable => "CLOSE_CLOSEABLE", false;
        FlushAfterWriteValue => "FLUSH_AFTER_WRITE_VALUE", true;
        WriteDatesAsTimestamps => "WRITE_DATES_AS_TIMESTAMPS", true;
        WriteDateKeysAsTimestamps => "WRITE_DATE_KEYS_AS_TIMESTAMPS", false;
        WriteDatesWithZoneId => "WRITE_DATES_WITH_ZONE_ID", false;
        WriteDurationsAsTimestamps => "WRITE_DURATIONS_AS_TIMESTAMPS", true;
        WriteCharArraysAsJsonArrays => "WRITE_CHAR_ARRAYS_AS_JSON_ARRAYS", false;
        WriteEnumsUsingToString => "WRITE_ENUMS_USING_TO_STRING", false;
        WriteEnumsUsingIndex => "WRITE_ENUMS_USING_INDEX", false;
        WriteSingleElemArraysUnwrapped => "WRITE_SINGLE_ELEM_ARRAYS_UNWRAPPED", false;
        OrderMapEntriesByKeys => "ORDER_MAP_ENTRIES_BY_KEYS", false;
        EagerSerializerFetch => "EAGER_SERIALIZER_FETCH", true;
        UseEqualityForObjectId => "USE_EQUALITY_FOR_OBJECT_ID", false;
    }
}

features! {
    /// Toggles affecting how values are read.
    DeserializationFeature => Deserialization {
        UseBigDecimalForFloats => "USE_BIG_DECIMAL_FOR_FLOATS", false;
        UseBigIntegerForInts => "USE_BIG_INTEGER_FOR_INTS", false;
        UseLongForInts => "USE_LONG_FOR_INTS", false;
        UseArrayForJsonArray => "USE_ARRAY_FOR_JSON_ARRAY", false;
        FailOnUnknownProperties => "FAIL_ON_UNKNOWN_PROPERTIES", true;
        FailOnNullForPrimitives => "FAIL_ON_NULL_FOR_PRIMITIVES", false;
        FailOnNumbersForEnums => "FAIL_ON_NUMBERS_FOR_ENUMS", false;
        FailOnInvalidSubtype => "FAIL_ON_INVALID_SUBTYPE", true;
        FailOnReadingDupTreeKey => "FAIL_ON_READING_DUP_TREE_KEY", false;
        FailOnIgnoredProperties => "FAIL_ON_IGNORED_PROPERTIES", false;
        FailOnMissingCreatorProperties => "FAIL_ON_MISSING_CREATOR_PROPERTIES", false;
        FailOnTrailingTokens => "FAIL_ON_TRAILING_TOKENS", false;
        WrapExceptions => "WRAP_EXCEPTIONS", true;
        AcceptSingleValueAsArray => "ACCEPT_SINGLE_VALUE_AS_ARRAY", false;
        UnwrapSingleValueArrays => "UNWRAP_SINGLE_VALUE_ARRAYS", false;
        UnwrapRootValue => "UNWRAP_ROOT_VALUE", false;
        AcceptEmptyStringAsNullObject => "ACCEPT_EMPTY_STRING_AS_NULL_OBJECT", false;
        AcceptFloatAsInt => "ACCEPT_FLOAT_AS_INT", true;
        ReadEnumsUsingToString => "READ_ENUMS_USING_TO_STRING", false;
        ReadUnknownEnumValuesAsNull => "READ_UNKNOWN_ENUM_VALUES_AS_NULL", false;
        AdjustDatesToContextTimeZone => "ADJUST_DATES_TO_CONTEXT_TIME_ZONE", true;
    }
}

features! {
    /// Toggles affecting property discovery and naming.
    MapperFeature => Mapper {
        UseAnnotations => "USE_ANNOTATIONS", true;
        AutoDetectCreators => "AUTO_DETECT_CREATORS", true;
        AutoDetectFields => "AUTO_DETECT_FIELDS", true;
        AutoDetectGetters => "AUTO_DETECT_GETTERS", true;
        AutoDetectIsGetters => "AUTO_DETECT_IS_GETTERS", true;
        AutoDetectSetters => "AUTO_DETECT_SETTERS", true;
        RequireSettersForGetters => "REQUIRE_SETTERS_FOR_GETTERS", false;
        AllowFinalFieldsAsMutators => "ALLOW_FINAL_FIELDS_AS_MUTATORS", true;
        InferPropertyMutators => "INFER_PROPERTY_MUTATORS", true;
        CanOverrideAccessModifiers => "CAN_OVERRIDE_ACCESS_MODIFIERS", true;
        DefaultViewInclusion => "DEFAULT_VIEW_INCLUSION", true;
        SortPropertiesAlphabetically => "SORT_PROPERTIES_ALPHABETICALLY", false;
        AcceptCaseInsensitiveProperties => "ACCEPT_CASE_INSENSITIVE_PROPERTIES", false;
        UseWrapperNameAsPropertyName => "USE_WRAPPER_NAME_AS_PROPERTY_NAME", false;
        UseStdBeanNaming => "USE_STD_BEAN_NAMING", false;
        AllowExplicitPropertyRenaming => "ALLOW_EXPLICIT_PROPERTY_RENAMING", false;
    }
}

features! {
    /// Toggles for the low-level token reader.
    ParserFeature => Parser {
        AutoCloseSource => "AUTO_CLOSE_SOURCE", true;
        AllowComments => "ALLOW_COMMENTS", false;
        AllowYamlComments => "ALLOW_YAML_COMMENTS", false;
        AllowUnquotedFieldNames => "ALLOW_UNQUOTED_FIELD_NAMES", false;
        AllowSingleQuotes => "ALLOW_SINGLE_QUOTES", false;
        AllowUnquotedControlChars => "ALLOW_UNQUOTED_CONTROL_CHARS", false;
        AllowBackslashEscapingAnyCharacter => "ALLOW_BACKSLASH_ESCAPING_ANY_CHARACTER", false;
        AllowNumericLeadingZeros => "ALLOW_NUMERIC_LEADING_ZEROS", false;
        AllowNonNumericNumbers => "ALLOW_NON_NUMERIC_NUMBERS", false;
        StrictDuplicateDetection => "STRICT_DUPLICATE_DETECTION", false;
        IgnoreUndefined => "IGNORE_UNDEFINED", false;
    }
}

features! {
    /// Toggles for the low-level token writer.
    GeneratorFeature => Generator {
        AutoCloseTarget => "AUTO_CLOSE_TARGET", true;
        AutoCloseJsonContent => "AUTO_CLOSE_JSON_CONTENT", true;
        FlushPassedToStream => "FLUSH_PASSED_TO_STREAM", true;
        QuoteFieldNames => "QUOTE_FIELD_NAMES", true;
        QuoteNonNumericNumbers => "QUOTE_NON_NUMERIC_NUMBERS", true;
        EscapeNonAscii => "ESCAPE_NON_ASCII", false;
        WriteNumbersAsStrings => "WRITE_NUMBERS_AS_STRINGS", false;
        WriteBigDecimalAsPlain => "WRITE_BIGDECIMAL_AS_PLAIN", false;
        StrictDuplicateDetection => "STRICT_DUPLICATE_DETECTION", false;
        IgnoreUnknown => "IGNORE_UNKNOWN", false;
    }
}

/// The five feature groups a codec exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Deserialization,
    Serialization,
    Mapper,
    Parser,
    Generator,
}

impl FeatureCategory {
    pub const ALL: &'static [FeatureCategory] = &[
        FeatureCategory::Deserialization,
        FeatureCategory::Serialization,
        FeatureCategory::Mapper,
        FeatureCategory::Parser,
        FeatureCategory::Generator,
    ];

    /// Property-style name of the category (`serialization`, `mapper`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            FeatureCategory::Deserialization => "deserialization",
            FeatureCategory::Serialization => "serialization",
            FeatureCategory::Mapper => "mapper",
            FeatureCategory::Parser => "parser",
            FeatureCategory::Generator => "generator",
        }
    }

    /// Find a category by name, ignoring case and separators.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = constant_key(name);
        Self::ALL
            .iter()
            .copied()
            .find(|c| constant_key(c.name()) == wanted)
    }

    /// Look up a feature of this category by constant name.
    pub fn feature(self, name: &str) -> Option<Feature> {
        match self {
            FeatureCategory::Deserialization => {
                DeserializationFeature::from_constant_name(name).map(Feature::from)
            }
            FeatureCategory::Serialization => {
                SerializationFeature::from_constant_name(name).map(Feature::from)
            }
            FeatureCategory::Mapper => MapperFeature::from_constant_name(name).map(Feature::from),
            FeatureCategory::Parser => ParserFeature::from_constant_name(name).map(Feature::from),
            FeatureCategory::Generator => {
                GeneratorFeature::from_constant_name(name).map(Feature::from)
            }
        }
    }

    /// Every feature of this category, in declaration order.
    pub fn features(self) -> Vec<Feature> {
        match self {
            FeatureCategory::Deserialization => collect(DeserializationFeature::ALL),
            FeatureCategory::Serialization => collect(SerializationFeature::ALL),
            FeatureCategory::Mapper => collect(MapperFeature::ALL),
            FeatureCategory::Parser => collect(ParserFeature::ALL),
            FeatureCategory::Generator => collect(GeneratorFeature::ALL),
        }
    }
}

fn collect<F: Copy + Into<Feature>>(all: &[F]) -> Vec<Feature> {
    all.iter().copied().map(Into::into).collect()
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A feature from any category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Deserialization(DeserializationFeature),
    Serialization(SerializationFeature),
    Mapper(MapperFeature),
    Parser(ParserFeature),
    Generator(GeneratorFeature),
}

impl Feature {
    pub const fn category(self) -> FeatureCategory {
        match self {
            Feature::Deserialization(_) => FeatureCategory::Deserialization,
            Feature::Serialization(_) => FeatureCategory::Serialization,
            Feature::Mapper(_) => FeatureCategory::Mapper,
            Feature::Parser(_) => FeatureCategory::Parser,
            Feature::Generator(_) => FeatureCategory::Generator,
        }
    }

    pub const fn constant_name(self) -> &'static str {
        match self {
            Feature::Deserialization(f) => f.constant_name(),
            Feature::Serialization(f) => f.constant_name(),
            Feature::Mapper(f) => f.constant_name(),
            Feature::Parser(f) => f.constant_name(),
            Feature::Generator(f) => f.constant_name(),
        }
    }

    pub const fn enabled_by_default(self) -> bool {
        match self {
            Feature::Deserialization(f) => f.enabled_by_default(),
            Feature::Serialization(f) => f.enabled_by_default(),
            Feature::Mapper(f) => f.enabled_by_default(),
            Feature::Parser(f) => f.enabled_by_default(),
            Feature::Generator(f) => f.enabled_by_default(),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category(), self.constant_name())
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
