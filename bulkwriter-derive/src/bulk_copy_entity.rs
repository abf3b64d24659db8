use proc_macro::TokenStream;
use quote::quote;
use syn::{DataStruct, DeriveInput, Field, LitBool, LitInt, LitStr, Result};

struct ColumnAttribute {
    ordinal: usize,
    insert_identity: bool,
}

pub(crate) fn generate_entity_for_struct(
    ast: &DeriveInput,
    data: &DataStruct,
) -> Result<TokenStream> {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let mut table_name: Option<String> = None;
    for attr in &ast.attrs {
        if attr.path().is_ident("map_to_table") {
            if table_name.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "Multiple map_to_table attributes are not allowed",
                ));
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value = meta.value()?;
                    let s: LitStr = value.parse()?;
                    table_name = Some(s.value());
                    Ok(())
                } else {
                    Err(meta.error("Unknown map_to_table attribute"))
                }
            })?;

            if table_name.is_none() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "map_to_table requires a table name: #[map_to_table(name = \"...\")]",
                ));
            }
        }
    }

    let fields: Vec<&Field> = match &data.fields {
        syn::Fields::Named(fields) => fields.named.iter().collect(),
        _ => {
            return Err(syn::Error::new_spanned(
                ast,
                "Only structs with named fields are supported",
            ))
        }
    };

    // Declaration order drives source ordinals
    let mut properties_code: Vec<proc_macro2::TokenStream> = Vec::with_capacity(fields.len());
    for field in fields {
        let ident = match field.ident.as_ref() {
            Some(ident) => ident,
            None => continue,
        };
        let field_name = ident.to_string();

        match parse_column_attribute(field)? {
            Some(column) => {
                let ordinal = column.ordinal;
                let insert_identity = column.insert_identity;
                let accessor = quote! {
                    |item: &Self| bulkwriter::common::ToValue::to_value(&item.#ident)
                };
                properties_code.push(quote! {
                    bulkwriter::mapping::PropertyInfo::mapped(
                        #field_name,
                        bulkwriter::mapping::MapToColumn::new(#ordinal)
                            .with_insert_identity(#insert_identity),
                        #accessor,
                    )
                });
            }
            None => {
                // unmapped fields are never read, their type needs no ToValue
                properties_code.push(quote! {
                    bulkwriter::mapping::PropertyInfo::unmapped(
                        #field_name,
                        |_: &Self| bulkwriter::common::Value::Null,
                    )
                });
            }
        }
    }

    let table_name_code = match table_name {
        Some(table_name) => quote! {
            fn table_name(&self) -> Option<String> {
                Some(#table_name.to_string())
            }
        },
        None => quote! {
            fn table_name(&self) -> Option<String> {
                None
            }
        },
    };

    let gen = quote! {
        impl #impl_generics bulkwriter::mapping::BulkCopyEntity for #name #ty_generics #where_clause {
            #table_name_code

            fn properties(&self) -> Vec<bulkwriter::mapping::PropertyInfo<Self>> {
                vec![#(#properties_code),*]
            }
        }
    };

    Ok(TokenStream::from(gen))
}

fn parse_column_attribute(field: &Field) -> Result<Option<ColumnAttribute>> {
    let mut column: Option<ColumnAttribute> = None;

    for attr in &field.attrs {
        if !attr.path().is_ident("map_to_column") {
            continue;
        }
        if column.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "Multiple map_to_column attributes are not allowed",
            ));
        }

        let mut ordinal: Option<usize> = None;
        let mut insert_identity = false;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("ordinal") {
                let value = meta.value()?;
                let lit: LitInt = value.parse()?;
                ordinal = Some(lit.base10_parse::<usize>()?);
                Ok(())
            } else if meta.path.is_ident("insert_identity") {
                // bare flag or `insert_identity = true|false`
                if meta.input.peek(syn::Token![=]) {
                    let value = meta.value()?;
                    let lit: LitBool = value.parse()?;
                    insert_identity = lit.value;
                } else {
                    insert_identity = true;
                }
                Ok(())
            } else {
                Err(meta.error("Unknown map_to_column attribute"))
            }
        })?;

        match ordinal {
            Some(ordinal) => {
                column = Some(ColumnAttribute {
                    ordinal,
                    insert_identity,
                })
            }
            None => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "map_to_column requires an ordinal: #[map_to_column(ordinal = 0)]",
                ))
            }
        }
    }

    Ok(column)
}
