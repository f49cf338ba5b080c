use super::Location;

const fn loc(name: &'static str, longitude: f64, latitude: f64) -> Location {
    Location {
        name,
        longitude,
        latitude,
    }
}

/// Known places, in curation order: cities, landmarks, research
/// facilities, airports. Names are stored lowercase; non-ASCII names must
/// be stored already folded since lookup only lowercases ASCII.
pub(super) static LOCATIONS: &[Location] = &[
    // Cities: United States
    loc("new york", -74.006, 40.7128),
    loc("new york city", -74.006, 40.7128),
    loc("nyc", -74.006, 40.7128),
    loc("the big apple", -74.006, 40.7128),
    loc("manhattan", -73.9712, 40.7831),

    loc("los angeles", -118.2437, 34.0522),
    loc("la", -118.2437, 34.0522),
    loc("city of angels", -118.2437, 34.0522),
    loc("hollywood", -118.3287, 34.0928),

    loc("chicago", -87.6298, 41.8781),
    loc("chi-town", -87.6298, 41.8781),
    loc("the windy city", -87.6298, 41.8781),
    loc("chitown", -87.6298, 41.8781),

    loc("houston", -95.3698, 29.7604),
    loc("h-town", -95.3698, 29.7604),
    loc("space city", -95.3698, 29.7604),

    loc("phoenix", -112.074, 33.4484),
    loc("phx", -112.074, 33.4484),

    loc("philadelphia", -75.1652, 39.9526),
    loc("philly", -75.1652, 39.9526),
    loc("the city of brotherly love", -75.1652, 39.9526),

    loc("san antonio", -98.4936, 29.4241),
    loc("san diego", -117.1611, 32.7157),

    loc("dallas", -96.797, 32.7767),
    loc("big d", -96.797, 32.7767),
    loc("fort worth", -97.3308, 32.7555),
    loc("dfw", -97.0403, 32.8998),

    loc("san jose", -121.8863, 37.3382),
    loc("silicon valley", -122.0322, 37.3688),

    loc("austin", -97.7431, 30.2672),
    loc("atx", -97.7431, 30.2672),

    loc("jacksonville", -81.6557, 30.3322),
    loc("san francisco", -122.4194, 37.7749),
    loc("sf", -122.4194, 37.7749),
    loc("frisco", -122.4194, 37.7749),
    loc("the bay", -122.4194, 37.7749),

    loc("seattle", -122.3321, 47.6062),
    loc("emerald city", -122.3321, 47.6062),
    loc("jet city", -122.3321, 47.6062),

    loc("denver", -104.9903, 39.7392),
    loc("mile high city", -104.9903, 39.7392),

    loc("boston", -71.0589, 42.3601),
    loc("beantown", -71.0589, 42.3601),
    loc("the hub", -71.0589, 42.3601),

    loc("washington dc", -77.0369, 38.9072),
    loc("washington d.c.", -77.0369, 38.9072),
    loc("washington", -77.0369, 38.9072),
    loc("dc", -77.0369, 38.9072),
    loc("d.c.", -77.0369, 38.9072),
    loc("the district", -77.0369, 38.9072),

    loc("las vegas", -115.1398, 36.1699),
    loc("vegas", -115.1398, 36.1699),
    loc("sin city", -115.1398, 36.1699),

    loc("miami", -80.1918, 25.7617),
    loc("magic city", -80.1918, 25.7617),

    loc("atlanta", -84.388, 33.749),
    loc("atl", -84.388, 33.749),
    loc("hotlanta", -84.388, 33.749),
    loc("the a", -84.388, 33.749),

    loc("detroit", -83.0458, 42.3314),
    loc("motown", -83.0458, 42.3314),
    loc("the d", -83.0458, 42.3314),
    loc("motor city", -83.0458, 42.3314),

    loc("minneapolis", -93.265, 44.9778),
    loc("portland", -122.6765, 45.5152),
    loc("pdx", -122.6765, 45.5152),
    loc("rip city", -122.6765, 45.5152),

    loc("new orleans", -90.0715, 29.9511),
    loc("nola", -90.0715, 29.9511),
    loc("the big easy", -90.0715, 29.9511),

    loc("pittsburgh", -79.9959, 40.4406),
    loc("steel city", -79.9959, 40.4406),

    loc("baltimore", -76.6122, 39.2904),
    loc("charm city", -76.6122, 39.2904),

    loc("cleveland", -81.6944, 41.4993),
    loc("nashville", -86.7816, 36.1627),
    loc("music city", -86.7816, 36.1627),

    loc("salt lake city", -111.891, 40.7608),
    loc("slc", -111.891, 40.7608),

    loc("honolulu", -157.8583, 21.3069),
    loc("anchorage", -149.9003, 61.2181),

    // Cities: Europe
    loc("london", -0.1276, 51.5074),
    loc("the big smoke", -0.1276, 51.5074),

    loc("paris", 2.3522, 48.8566),
    loc("city of light", 2.3522, 48.8566),
    loc("city of lights", 2.3522, 48.8566),

    loc("berlin", 13.405, 52.52),
    loc("munich", 11.582, 48.1351),
    loc("muenchen", 11.582, 48.1351),
    loc("frankfurt", 8.6821, 50.1109),
    loc("hamburg", 9.9937, 53.5511),

    loc("rome", 12.4964, 41.9028),
    loc("roma", 12.4964, 41.9028),
    loc("the eternal city", 12.4964, 41.9028),
    loc("milan", 9.19, 45.4642),
    loc("milano", 9.19, 45.4642),
    loc("venice", 12.3155, 45.4408),
    loc("venezia", 12.3155, 45.4408),
    loc("florence", 11.2558, 43.7696),
    loc("firenze", 11.2558, 43.7696),
    loc("naples", 14.2681, 40.8518),
    loc("napoli", 14.2681, 40.8518),

    loc("madrid", -3.7038, 40.4168),
    loc("barcelona", 2.1734, 41.3851),
    loc("barca", 2.1734, 41.3851),
    loc("seville", -5.9845, 37.3891),
    loc("sevilla", -5.9845, 37.3891),
    loc("valencia", -0.3763, 39.4699),

    loc("amsterdam", 4.9041, 52.3676),
    loc("the dam", 4.9041, 52.3676),

    loc("brussels", 4.3517, 50.8503),
    loc("bruxelles", 4.3517, 50.8503),

    loc("vienna", 16.3738, 48.2082),
    loc("wien", 16.3738, 48.2082),

    loc("zurich", 8.5417, 47.3769),
    loc("zuerich", 8.5417, 47.3769),
    loc("geneva", 6.1432, 46.2044),
    loc("geneve", 6.1432, 46.2044),

    loc("prague", 14.4378, 50.0755),
    loc("praha", 14.4378, 50.0755),
    loc("budapest", 19.0402, 47.4979),
    loc("warsaw", 21.0122, 52.2297),
    loc("warszawa", 21.0122, 52.2297),

    loc("moscow", 37.6173, 55.7558),
    loc("moskva", 37.6173, 55.7558),
    loc("saint petersburg", 30.3351, 59.9343),
    loc("st petersburg", 30.3351, 59.9343),

    loc("stockholm", 18.0686, 59.3293),
    loc("oslo", 10.7522, 59.9139),
    loc("copenhagen", 12.5683, 55.6761),
    loc("kobenhavn", 12.5683, 55.6761),
    loc("helsinki", 24.9384, 60.1699),
    loc("reykjavik", -21.9426, 64.1466),

    loc("dublin", -6.2603, 53.3498),
    loc("edinburgh", -3.1883, 55.9533),
    loc("glasgow", -4.2518, 55.8642),
    loc("manchester", -2.2426, 53.4808),
    loc("liverpool", -2.9916, 53.4084),
    loc("birmingham uk", -1.8904, 52.4862),

    loc("athens", 23.7275, 37.9838),
    loc("athina", 23.7275, 37.9838),

    loc("lisbon", -9.1393, 38.7223),
    loc("lisboa", -9.1393, 38.7223),

    // Cities: Asia
    loc("tokyo", 139.6917, 35.6895),
    loc("osaka", 135.5022, 34.6937),
    loc("kyoto", 135.7681, 35.0116),
    loc("nagoya", 136.9066, 35.1815),
    loc("yokohama", 139.6380, 35.4437),
    loc("sapporo", 141.3545, 43.0618),

    loc("beijing", 116.4074, 39.9042),
    loc("peking", 116.4074, 39.9042),
    loc("shanghai", 121.4737, 31.2304),
    loc("hong kong", 114.1694, 22.3193),
    loc("hk", 114.1694, 22.3193),
    loc("guangzhou", 113.2644, 23.1291),
    loc("shenzhen", 114.0579, 22.5431),
    loc("chengdu", 104.0665, 30.5728),
    loc("xian", 108.9402, 34.3416),
    loc("xi'an", 108.9402, 34.3416),
    loc("hangzhou", 120.1551, 30.2741),

    loc("seoul", 126.978, 37.5665),
    loc("busan", 129.0756, 35.1796),

    loc("taipei", 121.5654, 25.033),
    loc("taichung", 120.6736, 24.1477),

    loc("singapore", 103.8198, 1.3521),
    loc("the lion city", 103.8198, 1.3521),

    loc("bangkok", 100.5018, 13.7563),
    loc("krung thep", 100.5018, 13.7563),

    loc("kuala lumpur", 101.6869, 3.139),
    loc("kl", 101.6869, 3.139),

    loc("jakarta", 106.8456, -6.2088),
    loc("bali", 115.1889, -8.4095),
    loc("denpasar", 115.2126, -8.6705),

    loc("manila", 120.9842, 14.5995),
    loc("hanoi", 105.8342, 21.0278),
    loc("ho chi minh city", 106.6297, 10.8231),
    loc("saigon", 106.6297, 10.8231),

    loc("mumbai", 72.8777, 19.076),
    loc("bombay", 72.8777, 19.076),
    loc("delhi", 77.1025, 28.7041),
    loc("new delhi", 77.209, 28.6139),
    loc("bangalore", 77.5946, 12.9716),
    loc("bengaluru", 77.5946, 12.9716),
    loc("kolkata", 88.3639, 22.5726),
    loc("calcutta", 88.3639, 22.5726),
    loc("chennai", 80.2707, 13.0827),
    loc("madras", 80.2707, 13.0827),
    loc("hyderabad india", 78.4867, 17.385),

    loc("dubai", 55.2708, 25.2048),
    loc("abu dhabi", 54.3773, 24.4539),
    loc("doha", 51.5310, 25.2854),
    loc("riyadh", 46.7219, 24.7136),
    loc("jeddah", 39.1925, 21.4858),
    loc("tehran", 51.389, 35.6892),
    loc("tel aviv", 34.7818, 32.0853),
    loc("jerusalem", 35.2137, 31.7683),
    loc("istanbul", 28.9784, 41.0082),
    loc("ankara", 32.8597, 39.9334),

    // Cities: Oceania
    loc("sydney", 151.2093, -33.8688),
    loc("melbourne", 144.9631, -37.8136),
    loc("brisbane", 153.0251, -27.4698),
    loc("perth", 115.8605, -31.9505),
    // East of Greenwich, so the longitude is positive.
    loc("adelaide", 138.6007, -34.9285),
    loc("auckland", 174.7633, -36.8485),
    loc("wellington", 174.7762, -41.2865),
    loc("christchurch", 172.6362, -43.5321),

    // Cities: Africa
    loc("cairo", 31.2357, 30.0444),
    loc("cape town", 18.4241, -33.9249),
    loc("johannesburg", 28.0473, -26.2041),
    loc("joburg", 28.0473, -26.2041),
    loc("nairobi", 36.8219, -1.2921),
    loc("lagos", 3.3792, 6.5244),
    loc("casablanca", -7.5898, 33.5731),
    loc("marrakech", -7.9811, 31.6295),
    loc("tunis", 10.1658, 36.8065),
    loc("addis ababa", 38.7578, 9.0054),

    // Cities: South America
    loc("sao paulo", -46.6333, -23.5505),
    loc("rio de janeiro", -43.1729, -22.9068),
    loc("rio", -43.1729, -22.9068),
    loc("brasilia", -47.8825, -15.7942),
    loc("buenos aires", -58.3816, -34.6037),
    loc("ba", -58.3816, -34.6037),
    loc("santiago", -70.6693, -33.4489),
    loc("lima", -77.0428, -12.0464),
    loc("bogota", -74.0721, 4.711),
    loc("medellin", -75.5636, 6.2476),
    loc("caracas", -66.9036, 10.4806),
    loc("montevideo", -56.1645, -34.9011),
    loc("quito", -78.4678, -0.1807),

    // Cities: Central America & Caribbean
    loc("mexico city", -99.1332, 19.4326),
    loc("cdmx", -99.1332, 19.4326),
    loc("guadalajara", -103.3496, 20.6597),
    loc("cancun", -86.8515, 21.1619),
    loc("havana", -82.3666, 23.1136),
    loc("la habana", -82.3666, 23.1136),
    loc("san juan", -66.1057, 18.4655),
    loc("panama city", -79.5199, 8.9824),
    loc("kingston", -76.7936, 17.9714),
    loc("nassau", -77.3963, 25.0443),

    // Cities: Canada
    loc("toronto", -79.3832, 43.6532),
    loc("the 6", -79.3832, 43.6532),
    loc("the six", -79.3832, 43.6532),
    loc("vancouver", -123.1207, 49.2827),
    loc("montreal", -73.5673, 45.5017),
    loc("mtl", -73.5673, 45.5017),
    loc("calgary", -114.0719, 51.0447),
    loc("ottawa", -75.6972, 45.4215),
    loc("edmonton", -113.4909, 53.5461),
    loc("quebec city", -71.2082, 46.8139),
    loc("winnipeg", -97.1384, 49.8951),

    // Landmarks: North America and others
    loc("eiffel tower", 2.2945, 48.8584),
    loc("la tour eiffel", 2.2945, 48.8584),
    loc("statue of liberty", -74.0445, 40.6892),
    loc("lady liberty", -74.0445, 40.6892),
    loc("golden gate bridge", -122.4783, 37.8199),
    loc("grand canyon", -112.1401, 36.0544),
    loc("mount rushmore", -103.4591, 43.8791),
    loc("times square", -73.9855, 40.758),
    loc("central park", -73.9654, 40.7829),
    loc("empire state building", -73.9857, 40.7484),
    loc("white house", -77.0365, 38.8977),
    loc("capitol building", -77.0091, 38.8899),
    loc("us capitol", -77.0091, 38.8899),
    loc("lincoln memorial", -77.0502, 38.8893),
    loc("washington monument", -77.0353, 38.8895),
    loc("space needle", -122.3493, 47.6205),
    loc("hollywood sign", -118.3217, 34.1341),
    loc("alcatraz", -122.4229, 37.8267),
    loc("alcatraz island", -122.4229, 37.8267),
    loc("yellowstone", -110.5885, 44.428),
    loc("yellowstone national park", -110.5885, 44.428),
    loc("yosemite", -119.5383, 37.8651),
    loc("yosemite national park", -119.5383, 37.8651),
    loc("niagara falls", -79.0377, 43.0962),
    loc("pearl harbor", -157.9394, 21.3649),
    loc("uss arizona memorial", -157.9500, 21.3647),
    loc("hoover dam", -114.7377, 36.0160),
    loc("mount everest", 86.925, 27.9881),
    loc("everest", 86.925, 27.9881),

    // Landmarks: Europe
    loc("big ben", -0.1246, 51.5007),
    loc("tower of london", -0.0759, 51.5081),
    loc("buckingham palace", -0.1419, 51.5014),
    loc("london eye", -0.1195, 51.5033),
    loc("stonehenge", -1.8262, 51.1789),
    loc("colosseum", 12.4922, 41.8902),
    loc("the colosseum", 12.4922, 41.8902),
    loc("vatican", 12.4534, 41.9029),
    loc("vatican city", 12.4534, 41.9029),
    loc("st peter's basilica", 12.4534, 41.9022),
    loc("sistine chapel", 12.4545, 41.9029),
    loc("leaning tower of pisa", 10.3966, 43.723),
    loc("pisa", 10.3966, 43.723),
    loc("acropolis", 23.7257, 37.9715),
    loc("the acropolis", 23.7257, 37.9715),
    loc("parthenon", 23.7265, 37.9715),
    loc("notre dame", 2.3499, 48.853),
    loc("notre-dame", 2.3499, 48.853),
    loc("louvre", 2.3376, 48.8606),
    loc("the louvre", 2.3376, 48.8606),
    loc("arc de triomphe", 2.295, 48.8738),
    loc("versailles", 2.1204, 48.8049),
    loc("palace of versailles", 2.1204, 48.8049),
    loc("neuschwanstein", 10.7498, 47.5576),
    loc("neuschwanstein castle", 10.7498, 47.5576),
    loc("brandenburg gate", 13.3777, 52.5163),
    loc("sagrada familia", 2.1744, 41.4036),
    loc("la sagrada familia", 2.1744, 41.4036),
    loc("alhambra", -3.5886, 37.1761),
    loc("the alhambra", -3.5886, 37.1761),
    loc("red square", 37.6213, 55.7539),
    loc("kremlin", 37.6176, 55.752),
    loc("the kremlin", 37.6176, 55.752),
    loc("hagia sophia", 28.9801, 41.0086),
    loc("blue mosque", 28.9766, 41.0054),

    // Landmarks: Asia
    loc("great wall of china", 116.5704, 40.4319),
    loc("great wall", 116.5704, 40.4319),
    loc("forbidden city", 116.3972, 39.9169),
    loc("the forbidden city", 116.3972, 39.9169),
    loc("tiananmen square", 116.3912, 39.9054),
    loc("terracotta army", 109.2782, 34.3848),
    loc("terracotta warriors", 109.2782, 34.3848),
    loc("the bund", 121.4905, 31.2379),
    loc("mount fuji", 138.7274, 35.3606),
    loc("fuji", 138.7274, 35.3606),
    loc("fujisan", 138.7274, 35.3606),
    loc("tokyo tower", 139.7454, 35.6586),
    loc("tokyo skytree", 139.8107, 35.7101),
    loc("fushimi inari", 135.7727, 34.9671),
    loc("fushimi inari shrine", 135.7727, 34.9671),
    loc("gyeongbokgung", 126.977, 37.5796),
    loc("gyeongbokgung palace", 126.977, 37.5796),
    loc("taj mahal", 78.0421, 27.1751),
    loc("the taj mahal", 78.0421, 27.1751),
    loc("angkor wat", 103.867, 13.4125),
    loc("petra", 35.4444, 30.3285),
    loc("the treasury petra", 35.4514, 30.3228),
    loc("burj khalifa", 55.2744, 25.1972),
    loc("palm jumeirah", 55.1386, 25.1124),
    loc("marina bay sands", 103.8612, 1.2838),
    loc("gardens by the bay", 103.8636, 1.2816),

    // Landmarks: Oceania & Pacific
    loc("sydney opera house", 151.2153, -33.8568),
    loc("the opera house", 151.2153, -33.8568),
    loc("harbour bridge", 151.2108, -33.8523),
    loc("sydney harbour bridge", 151.2108, -33.8523),
    loc("uluru", 131.0369, -25.3444),
    loc("ayers rock", 131.0369, -25.3444),
    loc("great barrier reef", 145.7725, -16.2864),

    // Landmarks: South America
    loc("christ the redeemer", -43.2105, -22.9519),
    loc("cristo redentor", -43.2105, -22.9519),
    loc("machu picchu", -72.545, -13.1631),
    loc("machu pichu", -72.545, -13.1631),
    loc("iguazu falls", -54.4367, -25.6953),
    loc("iguacu falls", -54.4367, -25.6953),
    loc("copacabana beach", -43.1826, -22.9711),
    loc("sugarloaf mountain", -43.1575, -22.9491),
    loc("pao de acucar", -43.1575, -22.9491),

    // Landmarks: Africa
    loc("pyramids of giza", 31.1342, 29.9792),
    loc("great pyramid", 31.1342, 29.9792),
    loc("the pyramids", 31.1342, 29.9792),
    loc("sphinx", 31.1376, 29.9753),
    loc("the sphinx", 31.1376, 29.9753),
    loc("table mountain", 18.4039, -33.9628),
    loc("victoria falls", 25.8572, -17.9243),
    loc("serengeti", 34.8333, -2.3333),
    loc("kilimanjaro", 37.3556, -3.0674),
    loc("mount kilimanjaro", 37.3556, -3.0674),

    // Research facilities

    loc("cern", 6.0554, 46.2330),
    loc("large hadron collider", 6.0554, 46.2330),
    loc("lhc", 6.0554, 46.2330),
    loc("fermilab", -88.2575, 41.8319),
    loc("fermi national lab", -88.2575, 41.8319),
    loc("mit", -71.0942, 42.3601),
    loc("massachusetts institute of technology", -71.0942, 42.3601),
    loc("stanford", -122.1697, 37.4275),
    loc("stanford university", -122.1697, 37.4275),
    loc("caltech", -118.1253, 34.1377),
    loc("california institute of technology", -118.1253, 34.1377),
    loc("jpl", -118.1753, 34.2013),
    loc("jet propulsion laboratory", -118.1753, 34.2013),
    loc("nasa goddard", -76.8527, 38.9897),
    loc("goddard space flight center", -76.8527, 38.9897),
    loc("nasa houston", -95.0930, 29.5519),
    loc("johnson space center", -95.0930, 29.5519),
    loc("cape canaveral", -80.6077, 28.3922),
    loc("kennedy space center", -80.6508, 28.5728),
    loc("ksc", -80.6508, 28.5728),
    loc("vandenberg", -120.5724, 34.7420),
    loc("vandenberg space force base", -120.5724, 34.7420),
    loc("los alamos", -106.3031, 35.8800),
    loc("los alamos national lab", -106.3031, 35.8800),
    loc("lanl", -106.3031, 35.8800),
    loc("sandia labs", -106.5676, 35.0539),
    loc("sandia national laboratories", -106.5676, 35.0539),
    loc("lawrence livermore", -121.7111, 37.6887),
    loc("llnl", -121.7111, 37.6887),
    loc("oak ridge", -84.2696, 35.9315),
    loc("oak ridge national lab", -84.2696, 35.9315),
    loc("ornl", -84.2696, 35.9315),
    loc("brookhaven", -72.8868, 40.8692),
    loc("brookhaven national lab", -72.8868, 40.8692),
    loc("bnl", -72.8868, 40.8692),
    loc("argonne", -87.9800, 41.7172),
    loc("argonne national lab", -87.9800, 41.7172),
    loc("anl", -87.9800, 41.7172),
    loc("slac", -122.2004, 37.4196),
    loc("stanford linear accelerator", -122.2004, 37.4196),
    loc("ligo hanford", -119.4079, 46.4552),
    loc("ligo livingston", -90.7742, 30.5629),
    loc("desy", 9.8790, 53.5762),
    loc("deutsches elektronen-synchrotron", 9.8790, 53.5762),
    loc("max planck", 11.6699, 48.2486),
    loc("iter", 5.7717, 43.7076),
    loc("international thermonuclear experimental reactor", 5.7717, 43.7076),
    loc("esa headquarters", 2.3089, 48.8497),
    loc("european space agency", 2.3089, 48.8497),
    loc("roscosmos", 37.5177, 55.7065),
    loc("baikonur", 63.3050, 45.9650),
    loc("baikonur cosmodrome", 63.3050, 45.9650),
    loc("jiuquan", 100.2917, 40.9606),
    loc("jiuquan satellite launch center", 100.2917, 40.9606),
    loc("isro", 77.5116, 13.0297),
    loc("indian space research organisation", 77.5116, 13.0297),
    loc("jaxa", 139.5521, 35.6762),
    loc("japan aerospace exploration agency", 139.5521, 35.6762),
    loc("tanegashima", 130.9739, 30.4028),
    loc("tanegashima space center", 130.9739, 30.4028),

    // Airports (IATA codes and common names)

    loc("jfk", -73.7781, 40.6413),
    loc("jfk airport", -73.7781, 40.6413),
    loc("john f kennedy airport", -73.7781, 40.6413),
    loc("lax", -118.4085, 33.9416),
    loc("lax airport", -118.4085, 33.9416),
    loc("los angeles international", -118.4085, 33.9416),
    loc("ord", -87.9073, 41.9742),
    loc("ohare", -87.9073, 41.9742),
    loc("o'hare", -87.9073, 41.9742),
    loc("chicago ohare", -87.9073, 41.9742),
    loc("sfo", -122.3789, 37.6213),
    loc("sfo airport", -122.3789, 37.6213),
    loc("san francisco international", -122.3789, 37.6213),
    loc("sea", -122.3088, 47.4502),
    loc("seatac", -122.3088, 47.4502),
    loc("seattle tacoma airport", -122.3088, 47.4502),
    loc("bos", -71.0096, 42.3656),
    loc("logan airport", -71.0096, 42.3656),
    loc("boston logan", -71.0096, 42.3656),
    loc("mia", -80.2870, 25.7959),
    loc("miami international", -80.2870, 25.7959),
    loc("dfw airport", -97.0403, 32.8998),
    loc("dallas fort worth airport", -97.0403, 32.8998),
    loc("hartsfield jackson", -84.4281, 33.6407),
    loc("atlanta airport", -84.4281, 33.6407),
    loc("denver international", -104.6737, 39.8561),
    loc("dia", -104.6737, 39.8561),
    loc("lhr", -0.4543, 51.4700),
    loc("heathrow", -0.4543, 51.4700),
    loc("london heathrow", -0.4543, 51.4700),
    loc("cdg", 2.5479, 49.0097),
    loc("charles de gaulle", 2.5479, 49.0097),
    loc("paris cdg", 2.5479, 49.0097),
    loc("fra", 8.5622, 50.0379),
    loc("frankfurt airport", 8.5622, 50.0379),
    loc("ams", 4.7639, 52.3086),
    loc("schiphol", 4.7639, 52.3086),
    loc("amsterdam schiphol", 4.7639, 52.3086),
    loc("dxb", 55.3644, 25.2532),
    loc("dubai international", 55.3644, 25.2532),
    loc("hnd", 139.7798, 35.5494),
    loc("haneda", 139.7798, 35.5494),
    loc("tokyo haneda", 139.7798, 35.5494),
    loc("nrt", 140.3929, 35.7720),
    loc("narita", 140.3929, 35.7720),
    loc("tokyo narita", 140.3929, 35.7720),
    loc("pek", 116.4074, 40.0799),
    loc("beijing capital", 116.4074, 40.0799),
    loc("pvg", 121.8051, 31.1443),
    loc("shanghai pudong", 121.8051, 31.1443),
    loc("hkg", 113.9185, 22.3080),
    loc("hong kong airport", 113.9185, 22.3080),
    loc("sin", 103.9915, 1.3644),
    loc("changi", 103.9915, 1.3644),
    loc("singapore changi", 103.9915, 1.3644),
    loc("icn", 126.4407, 37.4602),
    loc("incheon", 126.4407, 37.4602),
    loc("seoul incheon", 126.4407, 37.4602),
    loc("bkk", 100.7501, 13.6900),
    loc("suvarnabhumi", 100.7501, 13.6900),
    loc("bangkok airport", 100.7501, 13.6900),
    loc("syd", 151.1753, -33.9399),
    loc("sydney airport", 151.1753, -33.9399),
    loc("mel", 144.8410, -37.6690),
    loc("melbourne airport", 144.8410, -37.6690),
    loc("gru", -46.4735, -23.4356),
    loc("guarulhos", -46.4735, -23.4356),
    loc("sao paulo airport", -46.4735, -23.4356),
    loc("eze", -58.5358, -34.8222),
    loc("ezeiza", -58.5358, -34.8222),
    loc("buenos aires airport", -58.5358, -34.8222),
    loc("yyz", -79.6248, 43.6777),
    loc("toronto pearson", -79.6248, 43.6777),
    loc("yvr", -123.1792, 49.1951),
    loc("vancouver airport", -123.1792, 49.1951),
    loc("yul", -73.7408, 45.4706),
    loc("montreal trudeau", -73.7408, 45.4706),
];
