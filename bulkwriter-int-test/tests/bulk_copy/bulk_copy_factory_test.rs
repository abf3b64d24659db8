use bulkwriter::bulk_copy::{BulkCopyFactory, BulkCopyOptions};
use bulkwriter::common::{Value, DEFAULT_BATCH_SIZE, DEFAULT_BULK_COPY_TIMEOUT};
use bulkwriter::errors::ErrorKind;
use bulkwriter::mapping::ColumnMapping;
use bulkwriter_int_test::fixtures::{
    employee, product, AuditEntry, Employee, Reading, EMPLOYEE_TABLE, PRODUCT_TABLE,
};
use bulkwriter_int_test::test_util::{cleanup, create_test_context, run_test};

#[test]
fn test_create_for_identity_preserving_type() {
    run_test(
        create_test_context,
        |ctx| {
            let factory = BulkCopyFactory::new(ctx.connection(), None);
            let (handle, mappings) = factory.create(Some(&employee(1, "Ada")))?;

            assert_eq!(handle.destination_table_name(), EMPLOYEE_TABLE);
            assert_eq!(handle.options(), BulkCopyOptions::KeepIdentity);
            assert_eq!(
                handle.column_mappings(),
                &[
                    ColumnMapping::new(0, 0),
                    ColumnMapping::new(1, 1),
                    ColumnMapping::new(2, 3),
                    ColumnMapping::new(3, 2),
                ]
            );
            assert_eq!(mappings.len(), 4);
            assert_eq!(mappings.ordinal_of("hired_on"), Some(2));
            assert_eq!(mappings.ordinal_of("manager_id"), Some(3));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_skips_unmapped_properties() {
    run_test(
        create_test_context,
        |ctx| {
            let factory = BulkCopyFactory::new(ctx.connection(), None);
            let (handle, mappings) = factory.create(Some(&product("lamp", 19.5)))?;

            assert_eq!(handle.destination_table_name(), PRODUCT_TABLE);
            assert_eq!(handle.options(), BulkCopyOptions::Default);
            // source ordinals count mapped properties only
            assert_eq!(
                handle.column_mappings(),
                &[
                    ColumnMapping::new(0, 4),
                    ColumnMapping::new(1, 1),
                    ColumnMapping::new(2, 2),
                ]
            );
            assert_eq!(mappings.len(), 3);
            assert_eq!(mappings.ordinal_of("display_label"), None);
            assert_eq!(mappings.ordinal_of("in_cart"), None);
            assert_eq!(mappings.ordinal_of("price"), Some(2));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_single_property_type() {
    run_test(
        create_test_context,
        |ctx| {
            let factory = BulkCopyFactory::new(ctx.connection(), None);
            let (handle, mappings) = factory.create(Some(&Reading { value: 2.5 }))?;

            assert_eq!(handle.column_mappings(), &[ColumnMapping::new(0, 7)]);
            assert_eq!(mappings.ordinal_of("value"), Some(0));
            assert_eq!(mappings.value_at(&Reading { value: 4.0 }, 0), Some(Value::F64(4.0)));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_uses_fixed_settings() {
    run_test(
        create_test_context,
        |ctx| {
            let factory = BulkCopyFactory::new(ctx.connection(), None);
            let (handle, _) = factory.create(Some(&employee(1, "Ada")))?;

            let config = handle.config();
            assert_eq!(config.batch_size(), DEFAULT_BATCH_SIZE);
            assert_eq!(config.batch_size(), 4096);
            assert_eq!(config.timeout(), DEFAULT_BULK_COPY_TIMEOUT);
            assert!(config.timeout().is_none());
            assert!(config.enable_streaming());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_without_item() {
    run_test(
        create_test_context,
        |ctx| {
            let factory = BulkCopyFactory::new(ctx.connection(), None);
            let result = factory.create::<Employee>(None);

            let err = result.err().expect("creating without an item must fail");
            assert_eq!(err.kind(), &ErrorKind::NullArgument);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_for_type_without_table() {
    run_test(
        create_test_context,
        |ctx| {
            let factory = BulkCopyFactory::new(ctx.connection(), None);
            let entry = AuditEntry {
                message: "login".to_string(),
            };
            let result = factory.create(Some(&entry));

            let err = result.err().expect("a type without a table must fail");
            assert_eq!(err.kind(), &ErrorKind::ConfigurationError);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_for_missing_destination_table() {
    run_test(
        || {
            // no fixture tables
            Ok(bulkwriter_int_test::test_util::TestContext::new(
                bulkwriter::memory::InMemoryConnection::new(),
            ))
        },
        |ctx| {
            let factory = BulkCopyFactory::new(ctx.connection(), None);
            let result = factory.create(Some(&employee(1, "Ada")));

            let err = result.err().expect("a missing table must fail");
            assert_eq!(err.kind(), &ErrorKind::BulkCopyError);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_enlists_transaction() {
    run_test(
        create_test_context,
        |ctx| {
            let transaction = ctx.connection().begin_transaction();
            let factory = BulkCopyFactory::new(ctx.connection(), Some(&transaction));
            let (handle, _) = factory.create(Some(&employee(1, "Ada")))?;

            let bulk_copy = handle.get_ref().expect("handle is open");
            assert_eq!(bulk_copy.transaction_id(), Some(transaction.id()));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_repeated_creates_are_independent() {
    run_test(
        create_test_context,
        |ctx| {
            let factory = BulkCopyFactory::new(ctx.connection(), None);
            let (mut first, first_mappings) = factory.create(Some(&employee(1, "Ada")))?;
            let (second, second_mappings) = factory.create(Some(&employee(2, "Bob")))?;

            assert_eq!(first.column_mappings(), second.column_mappings());
            assert_eq!(first_mappings.len(), second_mappings.len());

            first.close();
            assert!(first.is_closed());
            assert!(!second.is_closed());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_closed_handle_rejects_rows() {
    run_test(
        create_test_context,
        |ctx| {
            let factory = BulkCopyFactory::new(ctx.connection(), None);
            let item = employee(1, "Ada");
            let (mut handle, mappings) = factory.create(Some(&item))?;

            handle.close();
            handle.close();
            let err = handle.write_row(mappings.to_row(&item)).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::InvalidOperation);
            assert_eq!(ctx.connection().row_count(EMPLOYEE_TABLE)?, 0);
            Ok(())
        },
        cleanup,
    )
}
