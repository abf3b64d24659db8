use bulkwriter::bulk_copy::{BulkCopyFactory, BulkWriter};
use bulkwriter::common::Value;
use bulkwriter::errors::ErrorKind;
use bulkwriter_int_test::fixtures::{
    employee, product, AuditEntry, Employee, Reading, EMPLOYEE_TABLE, PRODUCT_TABLE, READING_TABLE,
};
use bulkwriter_int_test::test_util::{cleanup, create_test_context, run_test};
use chrono::NaiveDate;

#[test]
fn test_write_keeps_supplied_identities() {
    run_test(
        create_test_context,
        |ctx| {
            let transaction = ctx.connection().begin_transaction();
            let writer = BulkWriter::new(BulkCopyFactory::new(ctx.connection(), Some(&transaction)));

            let written = writer.write_to_database(vec![employee(10, "Ada"), employee(20, "Bob")])?;
            assert_eq!(written, 2);

            let rows = ctx.connection().rows(EMPLOYEE_TABLE)?;
            assert_eq!(rows.len(), 2);
            assert_eq!(
                rows[0].values(),
                &[
                    Value::I32(10),
                    Value::from("Ada"),
                    Value::I32(1),
                    Value::Date(NaiveDate::from_ymd_opt(2020, 1, 11).unwrap()),
                ]
            );
            assert_eq!(rows[1][0], Value::I32(20));
            assert_eq!(rows[1][1], Value::from("Bob"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_write_leaves_unmapped_columns_empty() {
    run_test(
        create_test_context,
        |ctx| {
            let writer = BulkWriter::new(BulkCopyFactory::new(ctx.connection(), None));
            let lamp = product("lamp", 19.5);
            let sku = lamp.sku;

            writer.write_to_database(vec![lamp])?;

            let rows = ctx.connection().rows(PRODUCT_TABLE)?;
            assert_eq!(
                rows[0].values(),
                &[
                    Value::Null,
                    Value::from("lamp"),
                    Value::F64(19.5),
                    Value::Null,
                    Value::Uuid(sku),
                ]
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_write_single_property_to_high_ordinal() {
    run_test(
        create_test_context,
        |ctx| {
            let writer = BulkWriter::new(BulkCopyFactory::new(ctx.connection(), None));
            let readings = (0..5).map(|i| Reading { value: i as f64 });

            assert_eq!(writer.write_to_database(readings)?, 5);

            let rows = ctx.connection().rows(READING_TABLE)?;
            assert_eq!(rows.len(), 5);
            for (i, row) in rows.iter().enumerate() {
                assert_eq!(row.len(), 8);
                assert_eq!(row[7], Value::F64(i as f64));
                assert!(row.values()[..7].iter().all(Value::is_null));
            }
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_write_more_rows_than_batch_size() {
    run_test(
        create_test_context,
        |ctx| {
            let writer = BulkWriter::new(BulkCopyFactory::new(ctx.connection(), None));
            let count = bulkwriter::common::DEFAULT_BATCH_SIZE * 2 + 3;
            let products = (0..count).map(|i| product(&format!("p{}", i), i as f64));

            assert_eq!(writer.write_to_database(products)?, count);
            assert_eq!(ctx.connection().row_count(PRODUCT_TABLE)?, count);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_write_nothing() {
    run_test(
        create_test_context,
        |ctx| {
            let writer = BulkWriter::new(BulkCopyFactory::new(ctx.connection(), None));
            assert_eq!(writer.write_to_database(Vec::<Employee>::new())?, 0);
            assert_eq!(ctx.connection().row_count(EMPLOYEE_TABLE)?, 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_write_type_without_table() {
    run_test(
        create_test_context,
        |ctx| {
            let writer = BulkWriter::new(BulkCopyFactory::new(ctx.connection(), None));
            let entries = vec![AuditEntry {
                message: "login".to_string(),
            }];

            let err = writer.write_to_database(entries).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::ConfigurationError);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_write_blank_table_name_reaches_connection() {
    #[derive(bulkwriter_derive::BulkCopyEntity)]
    #[map_to_table(name = "")]
    struct Unnamed {
        #[map_to_column(ordinal = 0)]
        label: String,
    }

    run_test(
        || {
            let ctx = create_test_context()?;
            ctx.connection().create_table("", 1, None)?;
            Ok(ctx)
        },
        |ctx| {
            let writer = BulkWriter::new(BulkCopyFactory::new(ctx.connection(), None));
            let items = vec![Unnamed {
                label: "x".to_string(),
            }];

            assert_eq!(writer.write_to_database(items)?, 1);
            assert_eq!(ctx.connection().rows("")?[0][0], Value::from("x"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_write_blank_table_name_without_such_table() {
    #[derive(bulkwriter_derive::BulkCopyEntity)]
    #[map_to_table(name = "")]
    struct Unnamed {
        #[map_to_column(ordinal = 0)]
        label: String,
    }

    run_test(
        create_test_context,
        |ctx| {
            let writer = BulkWriter::new(BulkCopyFactory::new(ctx.connection(), None));
            let items = vec![Unnamed {
                label: "x".to_string(),
            }];

            // rejected by the connection, not by configuration
            let err = writer.write_to_database(items).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::BulkCopyError);
            Ok(())
        },
        cleanup,
    )
}
