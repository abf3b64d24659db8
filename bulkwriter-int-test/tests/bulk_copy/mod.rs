mod bulk_copy_factory_test;
mod bulk_writer_test;
