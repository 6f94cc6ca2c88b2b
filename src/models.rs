use serde::{Deserialize, Deserializer, Serialize};

/// One catalog item. Field order here is the key order of the printed JSON.
/// Missing and `null` fields both decode to the zero value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "ID", alias = "id", deserialize_with = "null_to_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(deserialize_with = "null_to_default")]
    pub description: String,
    #[serde(deserialize_with = "null_to_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub discount_percentage: f32,
    #[serde(deserialize_with = "null_to_default")]
    pub rating: f32,
    #[serde(deserialize_with = "null_to_default")]
    pub stock: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub brand: String,
    #[serde(deserialize_with = "null_to_default")]
    pub category: String,
    #[serde(deserialize_with = "null_to_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_to_default")]
    pub images: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct ResponseEnvelope {
    pub products: Vec<Product>,
}

fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
