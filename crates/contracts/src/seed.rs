//! Static seed collections.
//!
//! The only "database" the app has: every session starts from these records
//! and a reload resets to them. Seed ids follow the `prop-N`/`broker-N`/
//! `owner-N` shape; newly created records get uuid-suffixed ids instead.

use crate::domain::broker::Broker;
use crate::domain::owner::Owner;
use crate::domain::property::{Address, Property, PropertyCategory, PropertyType};

pub fn brokers() -> Vec<Broker> {
    vec![
        Broker {
            id: "broker-1".into(),
            name: "Carlos Ferreira".into(),
            email: "carlos.f@imoveis.com".into(),
            phone: "(11) 98765-4321".into(),
            whatsapp: Some("5511987654321".into()),
            license_number: "CRECI-SP 12345".into(),
        },
        Broker {
            id: "broker-2".into(),
            name: "Ana Souza".into(),
            email: "ana.s@imoveis.com".into(),
            phone: "(21) 91234-5678".into(),
            whatsapp: Some("5521912345678".into()),
            license_number: "CRECI-RJ 54321".into(),
        },
    ]
}

pub fn owners() -> Vec<Owner> {
    vec![
        Owner {
            id: "owner-1".into(),
            name: "Marcos Silva".into(),
            email: "marcos@email.com".into(),
            phone: "(31) 99999-8888".into(),
        },
        Owner {
            id: "owner-2".into(),
            name: "Juliana Pereira".into(),
            email: "juliana@email.com".into(),
            phone: "(41) 98888-7777".into(),
        },
        Owner {
            id: "owner-3".into(),
            name: "Ricardo Oliveira".into(),
            email: "ricardo@email.com".into(),
            phone: "(51) 97777-6666".into(),
        },
    ]
}

pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop-1".into(),
            title: "Apartamento Moderno no Centro".into(),
            description: "Lindo apartamento com 3 quartos, suíte e varanda gourmet. \
                          Totalmente mobiliado e com vista para o parque da cidade."
                .into(),
            price: 750_000.0,
            property_type: PropertyType::Apartment,
            category: PropertyCategory::Urban,
            address: Address {
                street: "Av. Paulista, 1000".into(),
                city: "São Paulo".into(),
                state: "SP".into(),
                zip_code: "01310-100".into(),
            },
            bedrooms: 3,
            bathrooms: 2,
            area: 120.0,
            images: vec![
                "https://picsum.photos/seed/prop1/800/600".into(),
                "https://picsum.photos/seed/prop1-2/800/600".into(),
            ],
            broker_id: "broker-1".into(),
            owner_id: "owner-1".into(),
            features: vec![
                "Piscina".into(),
                "Academia".into(),
                "Salão de Festas".into(),
                "Portaria 24h".into(),
            ],
            is_featured: true,
        },
        Property {
            id: "prop-2".into(),
            title: "Casa Espaçosa com Piscina".into(),
            description: "Casa de condomínio com 4 suítes, amplo jardim, piscina e área \
                          de churrasqueira. Perfeita para famílias."
                .into(),
            price: 1_200_000.0,
            property_type: PropertyType::House,
            category: PropertyCategory::Urban,
            address: Address {
                street: "Rua das Flores, 50".into(),
                city: "Rio de Janeiro".into(),
                state: "RJ".into(),
                zip_code: "22050-002".into(),
            },
            bedrooms: 4,
            bathrooms: 5,
            area: 300.0,
            images: vec![
                "https://picsum.photos/seed/prop2/800/600".into(),
                "https://picsum.photos/seed/prop2-2/800/600".into(),
            ],
            broker_id: "broker-2".into(),
            owner_id: "owner-2".into(),
            features: vec![
                "Piscina".into(),
                "Churrasqueira".into(),
                "Jardim".into(),
                "Garagem para 4 carros".into(),
            ],
            is_featured: true,
        },
        Property {
            id: "prop-3".into(),
            title: "Sítio Aconchegante nas Montanhas".into(),
            description: "Sítio com casa principal, casa de caseiro, lago para pesca e \
                          muita área verde. Ideal para descanso."
                .into(),
            price: 980_000.0,
            property_type: PropertyType::SmallFarm,
            category: PropertyCategory::Rural,
            address: Address {
                street: "Estrada da Montanha, km 5".into(),
                city: "Petrópolis".into(),
                state: "RJ".into(),
                zip_code: "25651-070".into(),
            },
            bedrooms: 5,
            bathrooms: 4,
            area: 50_000.0,
            images: vec![
                "https://picsum.photos/seed/prop3/800/600".into(),
                "https://picsum.photos/seed/prop3-2/800/600".into(),
            ],
            broker_id: "broker-2".into(),
            owner_id: "owner-3".into(),
            features: vec![
                "Lago".into(),
                "Pomar".into(),
                "Casa de Caseiro".into(),
                "Nascente".into(),
            ],
            is_featured: false,
        },
        Property {
            id: "prop-4".into(),
            title: "Loft Industrial em Área Nobre".into(),
            description: "Loft com pé direito duplo, design industrial e acabamentos de \
                          alta qualidade. Conceito aberto e moderno."
                .into(),
            price: 650_000.0,
            property_type: PropertyType::Loft,
            category: PropertyCategory::Urban,
            address: Address {
                street: "Rua Oscar Freire, 200".into(),
                city: "São Paulo".into(),
                state: "SP".into(),
                zip_code: "01426-000".into(),
            },
            bedrooms: 1,
            bathrooms: 2,
            area: 90.0,
            images: vec!["https://picsum.photos/seed/prop4/800/600".into()],
            broker_id: "broker-1".into(),
            owner_id: "owner-1".into(),
            features: vec![
                "Pé Direito Duplo".into(),
                "Design Moderno".into(),
                "Cozinha Americana".into(),
            ],
            is_featured: true,
        },
        Property {
            id: "prop-5".into(),
            title: "Terreno Plano em Condomínio Fechado".into(),
            description: "Excelente terreno plano, pronto para construir, em condomínio \
                          com infraestrutura completa de lazer e segurança."
                .into(),
            price: 350_000.0,
            property_type: PropertyType::Land,
            category: PropertyCategory::Urban,
            address: Address {
                street: "Condomínio Vale Verde, Lote 25".into(),
                city: "Curitiba".into(),
                state: "PR".into(),
                zip_code: "80010-010".into(),
            },
            bedrooms: 0,
            bathrooms: 0,
            area: 1_000.0,
            images: vec!["https://picsum.photos/seed/prop5/800/600".into()],
            broker_id: "broker-1".into(),
            owner_id: "owner-2".into(),
            features: vec![
                "Segurança 24h".into(),
                "Clube".into(),
                "Área Verde".into(),
            ],
            is_featured: false,
        },
        Property {
            id: "prop-6".into(),
            title: "Fazenda Produtiva com Sede Histórica".into(),
            description: "Fazenda com grande área para plantio e criação, com sede \
                          histórica preservada. Inclui maquinário."
                .into(),
            price: 5_500_000.0,
            property_type: PropertyType::Farm,
            category: PropertyCategory::Rural,
            address: Address {
                street: "Rodovia BR-116, km 300".into(),
                city: "Juiz de Fora".into(),
                state: "MG".into(),
                zip_code: "36030-000".into(),
            },
            bedrooms: 8,
            bathrooms: 10,
            area: 1_000_000.0,
            images: vec!["https://picsum.photos/seed/prop6/800/600".into()],
            broker_id: "broker-2".into(),
            owner_id: "owner-3".into(),
            features: vec![
                "Sede Histórica".into(),
                "Curral".into(),
                "Maquinário".into(),
                "Rio".into(),
            ],
            is_featured: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_sizes_match_the_catalog() {
        assert_eq!(brokers().len(), 2);
        assert_eq!(owners().len(), 3);
        assert_eq!(properties().len(), 6);
    }

    #[test]
    fn exactly_two_seed_properties_are_not_featured() {
        let unfeatured: Vec<String> = properties()
            .into_iter()
            .filter(|p| !p.is_featured)
            .map(|p| p.id)
            .collect();
        assert_eq!(unfeatured, ["prop-3", "prop-5"]);
    }

    #[test]
    fn every_seed_reference_resolves() {
        // The seed itself has no dangling soft references; dangling only
        // appears after admin deletes.
        let broker_ids: Vec<String> = brokers().into_iter().map(|b| b.id).collect();
        let owner_ids: Vec<String> = owners().into_iter().map(|o| o.id).collect();
        for p in properties() {
            assert!(broker_ids.contains(&p.broker_id), "{}", p.id);
            assert!(owner_ids.contains(&p.owner_id), "{}", p.id);
        }
    }
}
