use crate::fixtures::{EMPLOYEE_TABLE, PRODUCT_TABLE, READING_TABLE};
use bulkwriter::errors::BulkWriterResult;
use bulkwriter::memory::InMemoryConnection;
use std::panic::{self, AssertUnwindSafe};

/// Runs `test` between `before` and `after`, panicking with the error's debug
/// output (message plus cause chain or backtrace) if any step fails.
/// `after` runs even when the test fails or panics; a test panic is resumed
/// once `after` is done.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> BulkWriterResult<()>,
    B: Fn() -> BulkWriterResult<TestContext>,
    A: Fn(TestContext) -> BulkWriterResult<()>,
{
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };

    let test_result = panic::catch_unwind(AssertUnwindSafe(|| test(ctx.clone())));
    let after_result = after(ctx);

    match test_result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("Test failed: {:?}", e),
        Err(payload) => panic::resume_unwind(payload),
    }
    if let Err(e) = after_result {
        panic!("After run failed: {:?}", e);
    }
}

#[derive(Clone)]
pub struct TestContext {
    connection: InMemoryConnection,
}

impl TestContext {
    pub fn new(connection: InMemoryConnection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &InMemoryConnection {
        &self.connection
    }
}

/// A fresh connection with the fixture tables created.
pub fn create_test_context() -> BulkWriterResult<TestContext> {
    let connection = InMemoryConnection::new();
    connection.create_table(EMPLOYEE_TABLE, 4, Some(0))?;
    connection.create_table(PRODUCT_TABLE, 5, None)?;
    connection.create_table(READING_TABLE, 8, None)?;
    Ok(TestContext::new(connection))
}

pub fn cleanup(ctx: TestContext) -> BulkWriterResult<()> {
    // tables live as long as the last connection clone
    log::debug!("Releasing test connection");
    drop(ctx);
    Ok(())
}
