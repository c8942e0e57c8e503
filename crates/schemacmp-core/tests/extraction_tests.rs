#![allow(clippy::unwrap_used, clippy::expect_used)]

use schemacmp_core::extract::{extract_category, extract_schema_elements};
use schemacmp_core::model::Category;

const DUMP: &str = r#"
--
-- PostgreSQL database dump
--
CREATE TABLE public.orders (
    id bigint NOT NULL,
    user_id uuid
);
CREATE TABLE public._prisma_migrations (id text);
ALTER TABLE ONLY public.orders
    ADD CONSTRAINT orders_pkey PRIMARY KEY (id);
ALTER TABLE ONLY public.orders
    ADD CONSTRAINT orders_user_id_fkey FOREIGN KEY (user_id) REFERENCES auth.users(id);
CREATE INDEX idx_orders_user_id ON public.orders USING btree (user_id);
CREATE UNIQUE INDEX orders_number_key ON public.orders USING btree (number);
CREATE FUNCTION public.update_updated_at_column() RETURNS trigger
    LANGUAGE plpgsql
    AS $$ BEGIN NEW.updated_at = now(); RETURN NEW; END; $$;
CREATE TRIGGER update_orders_updated_at BEFORE UPDATE ON public.orders FOR EACH ROW EXECUTE FUNCTION public.update_updated_at_column();
CREATE POLICY "Users can view own orders" ON public.orders FOR SELECT USING ((auth.uid() = user_id));
"#;

#[test]
fn test_pg_dump_style_extraction() {
    let elements = extract_schema_elements(DUMP);

    assert!(elements.contains(Category::Tables, "orders"));
    assert!(elements.contains(Category::Tables, "_prisma_migrations"));
    assert!(elements.contains(Category::Constraints, "orders_pkey"));
    assert!(elements.contains(Category::Constraints, "orders_user_id_fkey"));
    assert!(elements.contains(Category::Indexes, "idx_orders_user_id"));
    assert!(elements.contains(Category::Indexes, "orders_number_key"));
    assert!(elements.contains(Category::Functions, "update_updated_at_column"));
    assert!(elements.contains(Category::Triggers, "update_orders_updated_at"));
    assert!(elements.contains(Category::Policies, "Users can view own orders"));
}

#[test]
fn test_extraction_is_case_insensitive() {
    let sql = "create or replace function public.Touch() returns void;\n\
               create unique index if not exists IDX_upper on t (c);";
    let elements = extract_schema_elements(sql);
    assert!(elements.contains(Category::Functions, "Touch"));
    assert!(elements.contains(Category::Indexes, "IDX_upper"));
}

#[test]
fn test_other_schema_prefix_is_not_stripped() {
    // Only the `public.` prefix is optional; other schemas capture the schema name.
    let tables = extract_category("CREATE TABLE auth.users (id uuid);", Category::Tables);
    assert!(tables.contains("auth"));
    assert!(!tables.contains("users"));
}

#[test]
fn test_policy_split_across_lines_is_skipped() {
    let sql = "CREATE POLICY\n    \"Split policy\" ON t FOR SELECT;";
    assert!(extract_category(sql, Category::Policies).is_empty());
}

#[test]
fn test_extraction_is_symmetric_and_stateless() {
    let first = extract_schema_elements(DUMP);
    let _other = extract_schema_elements("CREATE TABLE unrelated (id int);");
    let second = extract_schema_elements(DUMP);
    assert_eq!(first, second);
}
