use crate::error::DecodeError;
use crate::models::ResponseEnvelope;

pub fn decode_envelope(body: &[u8]) -> Result<ResponseEnvelope, DecodeError> {
    serde_json::from_slice(body).map_err(DecodeError)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "products": [
            {
                "id": 1,
                "title": "iPhone 9",
                "description": "An apple mobile which is nothing like apple",
                "price": 549,
                "discountPercentage": 12.96,
                "rating": 4.69,
                "stock": 94,
                "brand": "Apple",
                "category": "smartphones",
                "thumbnail": "https://cdn.dummyjson.com/product-images/1/thumbnail.jpg",
                "images": ["a.jpg", "b.jpg"]
            },
            { "ID": 2, "title": "iPhone X", "price": 899 },
            { "id": 3, "title": "Samsung Universe 9", "price": 1249 }
        ],
        "total": 100,
        "skip": 0,
        "limit": 30
    }"#;

    #[test]
    fn decodes_products_in_payload_order() {
        let envelope = decode_envelope(BODY.as_bytes()).unwrap();
        let ids: Vec<i64> = envelope.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn maps_fields_verbatim() {
        let envelope = decode_envelope(BODY.as_bytes()).unwrap();
        let first = &envelope.products[0];
        assert_eq!(first.title, "iPhone 9");
        assert_eq!(first.price, 549);
        assert_eq!(first.discount_percentage, 12.96);
        assert_eq!(first.rating, 4.69);
        assert_eq!(first.stock, 94);
        assert_eq!(first.brand, "Apple");
        assert_eq!(first.category, "smartphones");
        assert_eq!(first.images, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn missing_product_fields_default() {
        let envelope = decode_envelope(BODY.as_bytes()).unwrap();
        let second = &envelope.products[1];
        assert_eq!(second.price, 899);
        assert!(second.brand.is_empty());
        assert!(second.images.is_empty());
    }

    #[test]
    fn null_product_fields_decode_to_zero_values() {
        let envelope = decode_envelope(
            br#"{"products": [{"id": 1, "title": "a", "brand": null, "images": null, "price": null}]}"#,
        )
        .unwrap();
        let product = &envelope.products[0];
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "a");
        assert!(product.brand.is_empty());
        assert!(product.images.is_empty());
        assert_eq!(product.price, 0);
    }

    #[test]
    fn null_products_list_is_an_error() {
        assert!(decode_envelope(br#"{"products": null}"#).is_err());
    }

    #[test]
    fn empty_list_is_valid() {
        let envelope = decode_envelope(br#"{"products": []}"#).unwrap();
        assert!(envelope.products.is_empty());
    }

    #[test]
    fn missing_products_field_is_an_error() {
        assert!(decode_envelope(br#"{"items": []}"#).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = decode_envelope(b"{\"products\": [").unwrap_err();
        assert!(err.to_string().starts_with("Failed to unmarshal JSON response"));
    }

    #[test]
    fn wrongly_typed_field_is_an_error() {
        assert!(decode_envelope(br#"{"products": [{"id": 1, "price": "cheap"}]}"#).is_err());
    }
}
