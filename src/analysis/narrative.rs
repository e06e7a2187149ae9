//! Authored commentary shown beside each chart.
//!
//! Lines starting with `- ` are bullets; `**Heading**:` lines are headings.

use super::Analysis;

const PRICE_DISTRIBUTION: &str = "\
- Los precios de la mayoría de los vehículos se concentran entre 10,000  y  20,000 dolares , indicando un mercado accesible para coches usados.
- Una menor cantidad de vehículos se encuentra en rangos más altos, sugiriendo la presencia de coches de lujo o nuevos.
- En Estados Unidos, el mercado de coches usados domina las ventas debido a su accesibilidad económica para una amplia gama de compradores.
- Los precios más altos se relacionan con vehículos nuevos, eléctricos o de marcas de lujo, como Tesla y Porsche.";

const VEHICLES_BY_STATE: &str = "\
- Los estados con mayor cantidad de vehículos en venta son California, Texas y Florida.
- Estos estados también representan grandes centros económicos y áreas de alta densidad poblacional.
- California y Texas tienen grandes mercados debido a su tamaño y economía diversificada. California, por ejemplo, tiene una fuerte presencia de marcas eléctricas como Tesla.
- Florida, con su población de jubilados, muestra una alta rotación de vehículos, lo que alimenta el mercado de coches usados.";

const AVG_PRICE_BY_YEAR: &str = "\
- Los precios promedio de vehículos más nuevos son consistentemente más altos debido al menor desgaste y depreciación.
- Se observa un comportamiento errático alrededor de 2008-2010, coincidiendo con la crisis financiera global, que afectó significativamente la demanda y los precios de los vehículos.
- La depreciación de los coches influye directamente en su valor: los coches más antiguos tienden a perder valor rápidamente.
- Eventos económicos, como la recesión de 2008, aumentaron la demanda de vehículos usados más baratos, afectando el mercado de modelos nuevos.";

const AVG_PRICE_BY_BRAND: &str = "\
**Marcas Principales**:
- Marcas premium como Porsche, Tesla y BMW dominan en precios más altos.
- Marcas populares y asequibles como Ford y Chevrolet tienen precios promedio moderados.

**Explicación Contextual**:
- Las marcas premium reflejan un enfoque en lujo, innovación y prestigio. Tesla, por ejemplo, lidera en coches eléctricos con precios altos debido a la percepción de tecnología avanzada.
- Marcas como Ford y Chevrolet se centran en vehículos accesibles, como camionetas y SUVs, ampliamente adoptados en zonas rurales y suburbanas.";

const TOP_COLORS: &str = "\
- Los colores más vendidos son generalmente neutrales como blanco, negro y gris.
- Los colores vibrantes, como el rojo o azul, son populares en segmentos específicos como deportivos.
- Los colores neutros son populares por su versatilidad y facilidad para revender el vehículo.
- Los colores llamativos son preferidos por compradores que buscan destacarse, especialmente en vehículos deportivos.";

pub fn for_analysis(analysis: Analysis) -> &'static str {
    match analysis {
        Analysis::PriceDistribution => PRICE_DISTRIBUTION,
        Analysis::VehiclesByState => VEHICLES_BY_STATE,
        Analysis::AvgPriceByYear => AVG_PRICE_BY_YEAR,
        Analysis::AvgPriceByBrand => AVG_PRICE_BY_BRAND,
        Analysis::TopColors => TOP_COLORS,
    }
}

/// A parsed line of narrative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeLine<'a> {
    Heading(&'a str),
    Bullet(&'a str),
    Paragraph(&'a str),
    Blank,
}

pub fn parse(text: &str) -> impl Iterator<Item = NarrativeLine<'_>> {
    text.lines().map(|line| {
        let line = line.trim();
        if line.is_empty() {
            NarrativeLine::Blank
        } else if let Some(rest) = line.strip_prefix("- ") {
            NarrativeLine::Bullet(rest)
        } else if let Some(inner) = line
            .strip_prefix("**")
            .and_then(|s| s.strip_suffix(':'))
            .and_then(|s| s.strip_suffix("**"))
        {
            NarrativeLine::Heading(inner)
        } else {
            NarrativeLine::Paragraph(line)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_text_has_headings_and_bullets() {
        let lines: Vec<_> = parse(for_analysis(Analysis::AvgPriceByBrand)).collect();
        assert_eq!(lines[0], NarrativeLine::Heading("Marcas Principales"));
        assert!(matches!(lines[1], NarrativeLine::Bullet(_)));
        assert!(lines.contains(&NarrativeLine::Blank));
        assert!(lines.contains(&NarrativeLine::Heading("Explicación Contextual")));
    }

    #[test]
    fn every_analysis_has_four_bullets() {
        for analysis in Analysis::ALL {
            let bullets = parse(for_analysis(analysis))
                .filter(|l| matches!(l, NarrativeLine::Bullet(_)))
                .count();
            assert_eq!(bullets, 4, "{analysis:?}");
        }
    }
}
