use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO categories (code, name)
            VALUES
                ('CLOTHING', 'Clothing'),
                ('SHOES', 'Shoes'),
                ('ACCESSORIES', 'Accessories')
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO products (code, price, category_id)
            VALUES
                ('PROD001', 10.99, (SELECT id FROM categories WHERE code = 'CLOTHING')),
                ('PROD002', 12.49, (SELECT id FROM categories WHERE code = 'SHOES')),
                ('PROD003', 8.75,  (SELECT id FROM categories WHERE code = 'ACCESSORIES')),
                ('PROD004', 15.00, (SELECT id FROM categories WHERE code = 'CLOTHING')),
                ('PROD005', 99.99, (SELECT id FROM categories WHERE code = 'SHOES')),
                ('PROD006', 7.25,  (SELECT id FROM categories WHERE code = 'ACCESSORIES')),
                ('PROD007', 3.50,  NULL),
                ('PROD008', 42.00, (SELECT id FROM categories WHERE code = 'CLOTHING'))
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO product_variants (product_id, name, sku, price)
            SELECT p.id, v.name, v.sku, v.price
            FROM (
                VALUES
                    ('PROD001', 'Red',    'SKU001-R', 11.99),
                    ('PROD001', 'Blue',   'SKU001-B', 0.00),
                    ('PROD001', 'Green',  'SKU001-G', 0.00),
                    ('PROD002', 'Size 41', 'SKU002-41', 0.00),
                    ('PROD002', 'Size 44', 'SKU002-44', 13.49),
                    ('PROD004', 'Small',  'SKU004-S', 0.00),
                    ('PROD004', 'Large',  'SKU004-L', 17.50),
                    ('PROD005', 'Leather', 'SKU005-L', 119.99)
            ) AS v(product_code, name, sku, price)
            JOIN products p ON p.code = v.product_code
            ON CONFLICT (sku) DO NOTHING
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DELETE FROM product_variants WHERE sku IN \
             ('SKU001-R','SKU001-B','SKU001-G','SKU002-41','SKU002-44','SKU004-S','SKU004-L','SKU005-L')",
        )
        .await?;
        db.execute_unprepared("DELETE FROM products WHERE code LIKE 'PROD00_'")
            .await?;
        db.execute_unprepared(
            "DELETE FROM categories WHERE code IN ('CLOTHING', 'SHOES', 'ACCESSORIES')",
        )
        .await?;
        Ok(())
    }
}
