//! Storefront GraphQL documents used by the HTTP routes.
//!
//! Documents are sent verbatim; selections are limited to the fields the
//! routes project into their responses.

/// Paginated catalog listing, sortable and filterable by search syntax.
pub const PRODUCTS_QUERY: &str = r"
query getProducts($first: Int!, $query: String, $sortKey: ProductSortKeys, $reverse: Boolean) {
  products(first: $first, query: $query, sortKey: $sortKey, reverse: $reverse) {
    edges {
      node {
        id handle title description
        priceRange { minVariantPrice { amount currencyCode } }
        compareAtPriceRange { minVariantPrice { amount currencyCode } }
        images(first: 1) { edges { node { url altText } } }
        availableForSale tags vendor productType
      }
      cursor
    }
    pageInfo { hasNextPage endCursor }
  }
}
";

/// Full product detail, including up to 50 variants.
pub const PRODUCT_BY_HANDLE_QUERY: &str = r"
query getProductByHandle($handle: String!) {
  productByHandle(handle: $handle) {
    id handle title description descriptionHtml
    priceRange {
      minVariantPrice { amount currencyCode }
      maxVariantPrice { amount currencyCode }
    }
    images(first: 10) { edges { node { url altText } } }
    availableForSale tags vendor productType
    variants(first: 50) {
      edges {
        node {
          id title availableForSale
          price { amount currencyCode }
          selectedOptions { name value }
        }
      }
    }
  }
}
";

/// Product search for the storefront search box.
pub const SEARCH_QUERY: &str = r"
query searchProducts($query: String!, $first: Int!) {
  products(first: $first, query: $query) {
    edges {
      node {
        id handle title description
        priceRange { minVariantPrice { amount currencyCode } }
        images(first: 1) { edges { node { url altText } } }
      }
    }
  }
}
";

pub const CART_CREATE_MUTATION: &str = r"
mutation cartCreate($input: CartInput!) {
  cartCreate(input: $input) {
    cart {
      id checkoutUrl totalQuantity
      cost { totalAmount { amount currencyCode } }
      lines(first: 100) {
        edges {
          node {
            id quantity
            merchandise {
              ... on ProductVariant {
                id title
                price { amount currencyCode }
                product { id title handle }
              }
            }
          }
        }
      }
    }
    userErrors { field message }
  }
}
";

pub const CART_LINES_ADD_MUTATION: &str = r"
mutation cartLinesAdd($cartId: ID!, $lines: [CartLineInput!]!) {
  cartLinesAdd(cartId: $cartId, lines: $lines) {
    cart { id checkoutUrl totalQuantity }
    userErrors { field message }
  }
}
";

pub const CART_LINES_UPDATE_MUTATION: &str = r"
mutation cartLinesUpdate($cartId: ID!, $lines: [CartLineUpdateInput!]!) {
  cartLinesUpdate(cartId: $cartId, lines: $lines) {
    cart { id checkoutUrl totalQuantity }
    userErrors { field message }
  }
}
";

pub const CART_LINES_REMOVE_MUTATION: &str = r"
mutation cartLinesRemove($cartId: ID!, $lineIds: [ID!]!) {
  cartLinesRemove(cartId: $cartId, lineIds: $lineIds) {
    cart { id }
    userErrors { field message }
  }
}
";
