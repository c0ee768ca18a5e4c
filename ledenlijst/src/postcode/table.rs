//! Built-in Belgian postal codes (deelgemeente level, Dutch names).
//!
//! Extend at runtime with `LEDENLIJST_POSTCODES` instead of editing this list.

pub(super) const POSTCODES: &[(&str, &str)] = &[
    // Brussels
    ("1000", "Brussel"),
    ("1020", "Laken"),
    ("1030", "Schaarbeek"),
    ("1040", "Etterbeek"),
    ("1050", "Elsene"),
    ("1060", "Sint-Gillis"),
    ("1070", "Anderlecht"),
    ("1080", "Sint-Jans-Molenbeek"),
    ("1081", "Koekelberg"),
    ("1082", "Sint-Agatha-Berchem"),
    ("1083", "Ganshoren"),
    ("1090", "Jette"),
    ("1120", "Neder-Over-Heembeek"),
    ("1130", "Haren"),
    ("1140", "Evere"),
    ("1150", "Sint-Pieters-Woluwe"),
    ("1160", "Oudergem"),
    ("1170", "Watermaal-Bosvoorde"),
    ("1180", "Ukkel"),
    ("1190", "Vorst"),
    ("1200", "Sint-Lambrechts-Woluwe"),
    ("1210", "Sint-Joost-ten-Node"),
    // Walloon Brabant
    ("1300", "Waver"),
    ("1340", "Ottignies"),
    ("1400", "Nijvel"),
    // Flemish Brabant
    ("1500", "Halle"),
    ("1600", "Sint-Pieters-Leeuw"),
    ("1640", "Sint-Genesius-Rode"),
    ("1700", "Dilbeek"),
    ("1730", "Asse"),
    ("1750", "Lennik"),
    ("1780", "Wemmel"),
    ("1800", "Vilvoorde"),
    ("1830", "Machelen"),
    ("1850", "Grimbergen"),
    ("1860", "Meise"),
    ("1930", "Zaventem"),
    ("1980", "Zemst"),
    ("3000", "Leuven"),
    ("3001", "Heverlee"),
    ("3010", "Kessel-Lo"),
    ("3012", "Wilsele"),
    ("3018", "Wijgmaal"),
    ("3020", "Herent"),
    ("3060", "Bertem"),
    ("3070", "Kortenberg"),
    ("3080", "Tervuren"),
    ("3090", "Overijse"),
    ("3110", "Rotselaar"),
    ("3200", "Aarschot"),
    ("3300", "Tienen"),
    ("3400", "Landen"),
    // Antwerp
    ("2000", "Antwerpen"),
    ("2018", "Antwerpen"),
    ("2020", "Antwerpen"),
    ("2030", "Antwerpen"),
    ("2040", "Antwerpen"),
    ("2050", "Antwerpen"),
    ("2060", "Antwerpen"),
    ("2100", "Deurne"),
    ("2140", "Borgerhout"),
    ("2150", "Borsbeek"),
    ("2160", "Wommelgem"),
    ("2170", "Merksem"),
    ("2180", "Ekeren"),
    ("2200", "Herentals"),
    ("2300", "Turnhout"),
    ("2400", "Mol"),
    ("2440", "Geel"),
    ("2500", "Lier"),
    ("2550", "Kontich"),
    ("2600", "Berchem"),
    ("2610", "Wilrijk"),
    ("2640", "Mortsel"),
    ("2650", "Edegem"),
    ("2800", "Mechelen"),
    ("2900", "Schoten"),
    ("2930", "Brasschaat"),
    ("2950", "Kapellen"),
    // Limburg
    ("3500", "Hasselt"),
    ("3600", "Genk"),
    ("3700", "Tongeren"),
    ("3800", "Sint-Truiden"),
    ("3900", "Pelt"),
    // Wallonia (main cities)
    ("4000", "Luik"),
    ("5000", "Namen"),
    ("6000", "Charleroi"),
    ("7000", "Bergen"),
    // West Flanders
    ("8000", "Brugge"),
    ("8200", "Sint-Andries"),
    ("8300", "Knokke-Heist"),
    ("8400", "Oostende"),
    ("8500", "Kortrijk"),
    ("8800", "Roeselare"),
    ("8900", "Ieper"),
    // East Flanders
    ("9000", "Gent"),
    ("9030", "Mariakerke"),
    ("9040", "Sint-Amandsberg"),
    ("9050", "Gentbrugge"),
    ("9100", "Sint-Niklaas"),
    ("9200", "Dendermonde"),
    ("9300", "Aalst"),
    ("9400", "Ninove"),
    ("9700", "Oudenaarde"),
    ("9800", "Deinze"),
    ("9900", "Eeklo"),
];
